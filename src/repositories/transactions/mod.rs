//! 거래 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`TransactionRepository`](transaction_repo::TransactionRepository) 트레이트와
//! MongoDB 구현체, 그리고 테스트 가능한 쿼리 문서 빌더([`queries`])를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::transactions::{MongoTransactionRepository, TransactionRepository};
//!
//! let repo = MongoTransactionRepository::new(Arc::new(database));
//! let income = repo.list_income("u1").await?;
//! ```

pub mod queries;
pub mod transaction_repo;

pub use transaction_repo::{MongoTransactionRepository, TransactionRepository};
