//! # Application Error Handling System
//!
//! 가계부 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 리포지토리 → 서비스 → 핸들러로 에러를 변형 없이 전파하고,
//! HTTP 상태 코드로의 변환은 `actix_web::ResponseError` 구현 한 곳에서만 수행합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 요청 본문, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 조건부 업데이트 대상 없음, 사용자 없음 |
//! | `ConflictError` | 409 Conflict | 이메일 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연결/쿼리 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 `{"error": "..."}` 형식을 따릅니다.
//! 5xx 에러는 상세 원인을 서버 로그에만 남기고 클라이언트에는 일반 메시지만 전달합니다.
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn soft_delete(&self, id: &str) -> AppResult<Transaction> {
//!     let object_id = parse_object_id(id)?;
//!     self.collection()
//!         .find_one_and_update(queries::active_by_id(object_id), queries::soft_delete_update(now))
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Transaction not found or already deleted".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// MongoDB 유니크 인덱스 위반 에러 코드
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 실패를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연결 실패, 쿼리 실행 오류 등. 500으로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 요청 본문 파싱 실패, `validator` 규칙 위반, 잘못된 ObjectId 형식 등.
    /// 400으로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 조건부 업데이트가 아무 문서도 매칭하지 못한 경우를 포함합니다.
    /// "존재하지 않음"과 "전제 조건 불일치"(이미 삭제됨, 삭제되지 않음)를 구분하지 않습니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 사용 중인 이메일로 사용자를 생성하려는 경우. 409로 응답됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// MongoDB 에러가 유니크 인덱스 위반(중복 키)인지 확인합니다.
pub fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        if is_duplicate_key(&error) {
            AppError::ConflictError("Duplicate key".to_string())
        } else {
            AppError::DatabaseError(error.to_string())
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 원인을 `log::error!`로 기록하고 일반 메시지로 대체합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        let message = if status.is_server_error() {
            log::error!("요청 처리 중 서버 오류 발생: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "error": message
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let database = Database::connect(&config).await
///     .context("MongoDB 연결 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: AppError) -> serde_json::Value {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap_or_default();
        serde_json::from_slice(&bytes).expect("error body should be JSON")
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("email is invalid".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Transaction not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already in use".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_error_response_hides_details() {
        let error = AppError::DatabaseError("connection refused on 10.0.0.7".to_string());
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(error);
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn test_client_error_body_keeps_message() {
        let body = body_json(AppError::ConflictError("Email already in use".to_string()));

        assert_eq!(body["error"], "Conflict error: Email already in use");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
