//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs      # 사용자 생성 요청
//! │   └── find_user.rs        # 이메일 조회 쿼리
//! └── response/
//!     └── user_response.rs    # 사용자 응답
//! ```
//!
//! ## 응답 예제
//!
//! ```json
//! {
//!   "message": "User created successfully",
//!   "data": {
//!     "id": "507f1f77bcf86cd799439011",
//!     "name": "Alice",
//!     "email": "alice@example.com",
//!     "created_at": "2024-01-01T00:00:00Z"
//!   }
//! }
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
