//! # Transaction Data Transfer Objects Module
//!
//! 거래 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! transactions/
//! ├── request/
//! │   ├── create_transaction.rs   # 거래 추가 요청
//! │   └── edit_transaction.rs     # 거래 부분 수정 요청
//! └── response/
//!     └── transaction_response.rs # 거래 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
