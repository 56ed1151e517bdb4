//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 길이: 1-100자
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//! - 중복 여부는 서비스 계층과 unique 인덱스에서 별도 검증
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{post, web, HttpResponse};
//! use validator::Validate;
//!
//! #[post("")]
//! async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let user = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(user))
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # 에러 응답 예제
///
/// 검증 실패 시 (400 Bad Request):
/// ```json
/// {
///   "error": "email: 유효한 이메일 주소를 입력해주세요"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = CreateUserRequest::new("Alice", "alice@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = CreateUserRequest::new("Alice", "not-an-email");
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let request = CreateUserRequest::new("", "alice@example.com");
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"name": "Alice"}"#);
        assert!(result.is_err());
    }
}
