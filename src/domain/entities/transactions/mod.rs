//! Transactions Entity Module
//!
//! 수입/지출 거래 엔티티, 거래 유형, 부분 수정(patch) 타입을 정의합니다.

pub mod transaction;

pub use transaction::{Transaction, TransactionPatch, TransactionType};
