use axum::Json;

/// `GET /`: answers with a JSON string while the service is up.
pub async fn health_check() -> Json<&'static str> {
    Json("Health check complete")
}
