//! # Core Module
//!
//! 서비스 전 계층이 공유하는 핵심 기능을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드 자동 매핑
//! - **MongoDB 변환**: 중복 키 에러를 `ConflictError`로, 나머지를 `DatabaseError`로 변환
//!
//! 의존성은 전역 레지스트리 없이 부트스트랩(`main.rs`)에서 생성자로 직접 주입됩니다:
//!
//! ```rust,ignore
//! let database = Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! let repo = Arc::new(MongoTransactionRepository::new(database.clone()));
//! let service = web::Data::new(TransactionService::new(repo));
//! ```

pub mod errors;

pub use errors::*;
