//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (MongoDB 문서 구조)
//! └── dto/          ← 데이터 전송 객체 (HTTP 요청/응답)
//! ```
//!
//! ## 컬렉션 매핑
//!
//! | 엔티티 | 컬렉션 | 인덱스 |
//! |--------|--------|--------|
//! | [`users::user::User`] | `users` | `email` (unique) |
//! | [`transactions::Transaction`] | `transactions` | `user_id + is_deleted + type`, `created_at` |
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 가지며, 저장 전에는 `None`입니다.
//! 시간 필드는 BSON `DateTime`으로 저장되고, 응답 DTO에서 RFC 3339 문자열로 변환됩니다.

pub mod transactions;
pub mod users;
