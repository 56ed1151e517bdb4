//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 서비스는 `web::Data<...Service>` 추출자로 주입받습니다.
//! - 요청 DTO는 `validate()` 후 서비스로 전달합니다.
//! - 성공 응답은 `ApiResponse { message, data }`로 감쌉니다.
//! - 실패는 `AppError`를 반환하면 `{ "error": ... }`와 상태 코드로 변환됩니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let user = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(ApiResponse::new(
//!         "User created successfully",
//!         UserResponse::from(user),
//!     )))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 생성, 이메일 조회
//! - **`transactions`**: 거래 추가, 목록, 소프트 삭제, 수정, 복구

pub mod transactions;
pub mod users;
