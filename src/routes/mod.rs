//! # Route Configuration
//!
//! 모든 HTTP 라우트와 추출자 설정을 한곳에서 등록합니다.
//!
//! ```text
//! /health                                   헬스체크
//! /api/v1/users                             사용자
//! /api/v1/transactions/{user_id}[/income|/expense]
//! /api/v1/transactions/{transaction_id}[/delete|/recover]
//! ```
//!
//! JSON 본문과 쿼리 문자열 파싱 실패는 `ValidationError`(400)로 변환되어
//! 다른 에러와 같은 `{ "error": ... }` 형태로 응답됩니다.

use actix_web::{HttpRequest, HttpResponse, error, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_transaction_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user_by_email),
    );
}

fn configure_transaction_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/transactions")
            .service(handlers::transactions::add_transaction)
            .service(handlers::transactions::get_transactions)
            .service(handlers::transactions::get_income_transactions)
            .service(handlers::transactions::get_expense_transactions)
            .service(handlers::transactions::edit_transaction)
            .service(handlers::transactions::delete_transaction)
            .service(handlers::transactions::recover_transaction),
    );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "finance_tracker_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "web::Data"
        }
    }))
}
