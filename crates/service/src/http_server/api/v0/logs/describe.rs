use axum::response::IntoResponse;
use axum::Json;

/// Static description of the log endpoint, returned on GET so the admin
/// panel can discover the expected shape.
pub async fn handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "endpoint": "/api/v0/logs",
        "method": "POST",
        "required": ["action", "details", "user"],
        "optional": ["userId", "sessionId", "deviceInfo"],
        "description": "Records an admin-panel audit event",
    }))
}
