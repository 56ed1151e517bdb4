//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 트레이트 객체(`Arc<dyn ...>`)를 생성자로 주입받으며,
//! `main`에서 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//!
//! # Features
//!
//! - 사용자 생성 및 이메일 중복 방지
//! - 거래 생명주기 관리 (추가, 조회, 소프트 삭제, 수정, 복구)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::web;
//! use crate::services::{transactions::TransactionService, users::UserService};
//!
//! let user_service = web::Data::new(UserService::new(user_repo));
//! let transaction_service = web::Data::new(TransactionService::new(transaction_repo));
//! ```

pub mod transactions;
pub mod users;
