use crate::drive::{Credentials, DriveClient, TokenGrant};
use crate::ServiceState;

use super::error::BackupOpsError;

/// Trade an OAuth2 authorization code for an access + refresh token
/// pair. The admin panel stores the refresh token client-side and
/// replays it with every later backup action.
pub async fn exchange_auth_code(
    credentials: Credentials,
    auth_code: &str,
    state: &ServiceState,
) -> Result<TokenGrant, BackupOpsError> {
    let client = DriveClient::new(credentials, state.drive_endpoints().clone())?;
    let grant = client.exchange_code(auth_code).await?;
    Ok(grant)
}
