use axum::Router;
use http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use http::Method;
use tower_http::cors::{Any, CorsLayer};

pub mod backup;
pub mod logs;
pub mod thumbnail;

use crate::ServiceState;

pub fn router(state: ServiceState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST])
        .allow_headers(vec![ACCEPT, CONTENT_TYPE, ORIGIN])
        .allow_origin(Any)
        .allow_credentials(false);

    Router::new()
        .nest("/backup", backup::router(state.clone()))
        .nest("/thumbnails", thumbnail::router(state.clone()))
        .nest("/logs", logs::router(state))
        .layer(cors_layer)
}
