//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users?email=` | 이메일로 사용자 조회 | 200 OK |
//!
//! ## 에러 응답
//!
//! | 상태 코드 | 원인 |
//! |-----------|------|
//! | 400 | 잘못된 JSON, 필수 필드 누락, 이메일 형식 오류 |
//! | 404 | 해당 이메일의 사용자 없음 |
//! | 409 | 이미 사용 중인 이메일 |
//! | 500 | 데이터베이스 오류 |

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::users::{CreateUserRequest, UserEmailQuery, UserResponse};
use crate::services::users::UserService;

/// 새 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "message": "User created successfully",
///   "data": {
///     "id": "507f1f77bcf86cd799439011",
///     "name": "Alice",
///     "email": "alice@example.com",
///     "created_at": "2024-01-01T00:00:00Z"
///   }
/// }
/// ```
///
/// ## 이메일 중복 (409 Conflict)
/// ```json
/// { "error": "Conflict error: 이미 사용 중인 이메일입니다" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Alice", "email": "alice@example.com"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        "User created successfully",
        UserResponse::from(user),
    )))
}

/// 이메일로 사용자 조회 핸들러
///
/// `GET /api/v1/users?email=alice@example.com`
#[get("")]
pub async fn get_user_by_email(
    service: web::Data<UserService>,
    query: web::Query<UserEmailQuery>,
) -> Result<HttpResponse, AppError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.get_user_by_email(&query.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        "User retrieved successfully",
        UserResponse::from(user),
    )))
}
