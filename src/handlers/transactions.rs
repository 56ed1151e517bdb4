//! # Transaction HTTP Handlers
//!
//! 거래 추가, 목록 조회, 소프트 삭제, 수정, 복구 엔드포인트입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/transactions/{user_id}` | 거래 추가 | 201 Created |
//! | `GET` | `/api/v1/transactions/{user_id}` | 활성 거래 전체 | 200 OK |
//! | `GET` | `/api/v1/transactions/{user_id}/income` | 활성 수입 거래 | 200 OK |
//! | `GET` | `/api/v1/transactions/{user_id}/expense` | 활성 지출 거래 | 200 OK |
//! | `PATCH` | `/api/v1/transactions/{transaction_id}` | 부분 수정 | 200 OK |
//! | `PATCH` | `/api/v1/transactions/{transaction_id}/delete` | 소프트 삭제 | 200 OK |
//! | `PATCH` | `/api/v1/transactions/{transaction_id}/recover` | 복구 | 200 OK |
//!
//! 거래 ID가 ObjectId 형식이 아니면 400, 전제 조건(활성/삭제 상태)이 맞지 않거나
//! 거래가 없으면 404를 반환합니다.

use actix_web::{HttpResponse, get, patch, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::transactions::{
    CreateTransactionRequest, EditTransactionRequest, TransactionResponse,
};
use crate::domain::entities::transactions::Transaction;
use crate::services::transactions::TransactionService;

fn single(message: &str, transaction: Transaction) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::new(
        message,
        TransactionResponse::from(transaction),
    ))
}

fn many(message: &str, transactions: Vec<Transaction>) -> HttpResponse {
    let data: Vec<TransactionResponse> = transactions
        .into_iter()
        .map(TransactionResponse::from)
        .collect();

    HttpResponse::Ok().json(ApiResponse::new(message, data))
}

/// 거래 추가 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/transactions/{user_id}`
///
/// # 요청 본문
///
/// ```json
/// { "title": "Salary", "amount": 1234.56, "type": "Income" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/transactions/u1 \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Salary", "amount": 1234.56, "type": "Income"}'
/// ```
#[post("/{user_id}")]
pub async fn add_transaction(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
    payload: web::Json<CreateTransactionRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_id = path.into_inner();
    let transaction = service
        .add_transaction(&user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        "Transaction added successfully",
        TransactionResponse::from(transaction),
    )))
}

/// 사용자의 활성 거래 전체 조회
#[get("/{user_id}")]
pub async fn get_transactions(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transactions = service.get_transactions(&path).await?;
    Ok(many("Transactions retrieved successfully", transactions))
}

#[get("/{user_id}/income")]
pub async fn get_income_transactions(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transactions = service.get_income_transactions(&path).await?;
    Ok(many("Income transactions retrieved successfully", transactions))
}

#[get("/{user_id}/expense")]
pub async fn get_expense_transactions(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transactions = service.get_expense_transactions(&path).await?;
    Ok(many("Expense transactions retrieved successfully", transactions))
}

/// 거래 부분 수정 핸들러
///
/// `PATCH /api/v1/transactions/{transaction_id}`
///
/// 본문에 포함된 필드(`title`, `amount`, `type`)만 변경되며 `updated_at`이 갱신됩니다.
/// 삭제된 거래는 수정할 수 없습니다 (404).
#[patch("/{transaction_id}")]
pub async fn edit_transaction(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
    payload: web::Json<EditTransactionRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let transaction = service
        .edit_transaction(&path, payload.into_inner())
        .await?;
    Ok(single("Transaction edited successfully", transaction))
}

/// 거래 소프트 삭제 핸들러
///
/// `PATCH /api/v1/transactions/{transaction_id}/delete`
#[patch("/{transaction_id}/delete")]
pub async fn delete_transaction(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transaction = service.delete_transaction(&path).await?;
    Ok(single("Transaction deleted successfully", transaction))
}

/// 삭제된 거래 복구 핸들러
///
/// `PATCH /api/v1/transactions/{transaction_id}/recover`
#[patch("/{transaction_id}/recover")]
pub async fn recover_transaction(
    service: web::Data<TransactionService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let transaction = service.recover_transaction(&path).await?;
    Ok(single("Transaction recovered successfully", transaction))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::repositories::memory::InMemoryTransactionRepository;
    use crate::routes::configure_all_routes;

    fn transaction_service() -> web::Data<TransactionService> {
        web::Data::new(TransactionService::new(Arc::new(
            InMemoryTransactionRepository::new(),
        )))
    }

    fn ids(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn test_add_then_list_by_type() {
        let app = test::init_service(
            App::new()
                .app_data(transaction_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/transactions/u1")
            .set_json(json!({ "title": "Salary", "amount": 1234.56, "type": "Income" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction added successfully");
        assert_eq!(body["data"]["user_id"], "u1");
        assert_eq!(body["data"]["type"], "Income");
        assert_eq!(body["data"]["is_deleted"], false);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/api/v1/transactions/u1").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["message"], "Transactions retrieved successfully");
        assert_eq!(ids(&body), vec![id.clone()]);

        let req = test::TestRequest::get()
            .uri("/api/v1/transactions/u1/income")
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(body["message"], "Income transactions retrieved successfully");
        assert_eq!(ids(&body), vec![id]);

        let req = test::TestRequest::get()
            .uri("/api/v1/transactions/u1/expense")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Expense transactions retrieved successfully");
        assert!(ids(&body).is_empty());
    }

    #[actix_web::test]
    async fn test_delete_twice_then_recover() {
        let app = test::init_service(
            App::new()
                .app_data(transaction_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/transactions/u1")
            .set_json(json!({ "title": "Rent", "amount": -900.0, "type": "Expense" }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/transactions/{}/delete", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction deleted successfully");
        assert_eq!(body["data"]["is_deleted"], true);
        assert!(body["data"]["deleted_at"].is_string());

        let req = test::TestRequest::get().uri("/api/v1/transactions/u1").to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert!(ids(&body).is_empty());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/transactions/{}/delete", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/transactions/{}/recover", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction recovered successfully");
        assert_eq!(body["data"]["is_deleted"], false);
        assert!(body["data"]["deleted_at"].is_null());

        let req = test::TestRequest::get()
            .uri("/api/v1/transactions/u1/expense")
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(ids(&body), vec![id]);
    }

    #[actix_web::test]
    async fn test_edit_partial_fields() {
        let app = test::init_service(
            App::new()
                .app_data(transaction_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/transactions/u1")
            .set_json(json!({ "title": "Salary", "amount": 1000.0, "type": "Income" }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert!(body["data"]["updated_at"].is_null());

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/transactions/{}", id))
            .set_json(json!({ "amount": 1500.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Transaction edited successfully");
        assert_eq!(body["data"]["title"], "Salary");
        assert_eq!(body["data"]["amount"], 1500.0);
        assert_eq!(body["data"]["type"], "Income");
        assert!(body["data"]["updated_at"].is_string());
    }

    #[actix_web::test]
    async fn test_bad_input_statuses() {
        let app = test::init_service(
            App::new()
                .app_data(transaction_service())
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/transactions/u1")
            .set_json(json!({ "title": "Gift", "type": "Income" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = test::TestRequest::post()
            .uri("/api/v1/transactions/u1")
            .set_json(json!({ "title": "Gift", "amount": 5, "type": "Transfer" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = test::TestRequest::patch()
            .uri("/api/v1/transactions/t1/delete")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let unknown = mongodb::bson::oid::ObjectId::new().to_hex();
        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/transactions/{}/recover", unknown))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
