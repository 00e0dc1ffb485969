use crate::domain::inquiry_repository::InquiryRepository;
use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};

/// Report process liveness and the store driver's cached connectivity state.
/// Read-only; intended for operational polling.
#[tracing::instrument(name = "Health check", skip(repository))]
pub async fn health_check(repository: web::Data<dyn InquiryRepository>) -> HttpResponse {
    match repository.connection_state() {
        Ok(state) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "server": "running",
            "mongo": state.as_str(),
            "time": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "message": "Health check failed",
            "error": e.to_string(),
        })),
    }
}
