//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **요청 DTO**: `serde`로 역직렬화하고 `validator`로 필드 제약을 검증합니다.
//! - **응답 DTO**: 엔티티에서 `From`으로 변환하며, ID는 hex 문자열,
//!   시간은 RFC 3339 문자열로 노출합니다.
//! - **봉투**: 성공 응답은 [`common::ApiResponse`]로 감쌉니다.
//!
//! ## 구조
//!
//! ```text
//! dto/
//! ├── common.rs        - ApiResponse 봉투
//! ├── users/           - 사용자 요청/응답
//! └── transactions/    - 거래 요청/응답
//! ```

pub mod common;
pub mod transactions;
pub mod users;

pub use common::ApiResponse;
pub use transactions::{CreateTransactionRequest, EditTransactionRequest, TransactionResponse};
pub use users::{CreateUserRequest, UserEmailQuery, UserResponse};
