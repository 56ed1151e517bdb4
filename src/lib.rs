//! 개인 가계부 서비스 백엔드
//!
//! 사용자별 수입/지출 거래를 기록하고 조회하는 REST API 서비스입니다.
//! 거래는 물리적으로 삭제되지 않고 소프트 삭제 후 복구할 수 있습니다.
//!
//! # Features
//!
//! - **사용자 관리**: 사용자 생성, 이메일 조회 (이메일 중복 방지)
//! - **거래 기록**: 추가, 전체/수입/지출 목록, 부분 수정
//! - **소프트 삭제**: `is_deleted` 플래그 기반 삭제와 복구
//! - **명시적 DI**: 리포지토리 트레이트 객체를 서비스 생성자로 주입
//! - **MongoDB**: 사용자/거래 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use finance_tracker_backend::repositories::transactions::MongoTransactionRepository;
//! use finance_tracker_backend::services::transactions::TransactionService;
//!
//! let repo = Arc::new(MongoTransactionRepository::new(database.clone()));
//! let service = TransactionService::new(repo);
//!
//! let tx = service.add_transaction("u1", request).await?;
//! let income = service.get_income_transactions("u1").await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
