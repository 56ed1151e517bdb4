//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 가계부의 데이터 구조와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB에 저장되는 핵심 객체 (User, Transaction)
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! - **User**: 이메일이 고유한 사용자. 생성 후 변경되지 않습니다.
//! - **Transaction**: 사용자 소유의 수입/지출 기록. 소프트 삭제와 복구를 지원합니다.
//! - **TransactionPatch**: 거래 부분 수정 내용 (전달된 필드만 변경)
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 사용하는 요청/응답 구조입니다. 요청 DTO는 `validator`로 검증되고,
//! 응답 DTO는 엔티티에서 `From` 변환으로 생성됩니다.
//!
//! ## 실제 사용 예제
//!
//! ### 거래 추가 플로우
//!
//! ```rust,ignore
//! use crate::domain::dto::{ApiResponse, CreateTransactionRequest, TransactionResponse};
//!
//! // 1. DTO로 입력 받기 + 유효성 검증
//! request.validate()?;
//!
//! // 2. 서비스 계층을 통한 영속화
//! let transaction = transaction_service
//!     .add_transaction(&user_id, request)
//!     .await?;
//!
//! // 3. 응답 DTO로 변환
//! let body = ApiResponse::new(
//!     "Transaction added successfully",
//!     TransactionResponse::from(transaction),
//! );
//! ```
//!
//! ## 트러블슈팅
//!
//! #### 직렬화/역직렬화 오류
//! ```text
//! Error: missing field `is_deleted`
//! 해결: #[serde(default)] 또는 Option<T> 사용
//! ```

pub mod dto;
pub mod entities;
