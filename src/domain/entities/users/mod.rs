//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new("Alice".to_string(), "alice@example.com".to_string());
//! assert!(user.id.is_none()); // 저장 시 MongoDB가 할당
//! ```

pub mod user;
