//! 거래 서비스 모듈
//!
//! 거래 추가, 목록 조회, 소프트 삭제, 수정, 복구를 리포지토리에 위임합니다.

pub mod transaction_service;

pub use transaction_service::TransactionService;
