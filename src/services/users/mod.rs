//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성과 조회 비즈니스 로직을 제공합니다.
//!
//! # Features
//!
//! - 이메일 중복 방지 (사전 확인 + 유니크 제약)
//! - 이메일 기반 사용자 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new(user_repo);
//! let user = user_service
//!     .create_user(CreateUserRequest::new("Alice", "alice@example.com"))
//!     .await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
