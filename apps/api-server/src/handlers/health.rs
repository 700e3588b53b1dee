//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "postgres" or "memory", so a probe can tell a degraded process from
    /// a healthy one.
    pub backend: String,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        backend: state.backend.to_owned(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web::Data};
    use std::sync::Arc;
    use wall_infra::InMemoryPostRepository;

    #[actix_rt::test]
    async fn health_reports_status_and_backend() {
        let state = AppState::with_repository(Arc::new(InMemoryPostRepository::new()));
        let app = test::init_service(
            App::new()
                .app_data(Data::new(state))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(res.status().is_success());

        let body: HealthResponse = test::read_body_json(res).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.backend, "memory");
    }
}
