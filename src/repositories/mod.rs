//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `async_trait` 기반 트레이트와 MongoDB 구현체로 구성됩니다.
//! 서비스는 `Arc<dyn ...Repository>`로 트레이트에만 의존하므로,
//! 테스트에서는 [`memory`] 모듈의 인메모리 구현체를 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let db = Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db));
//! ```

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};

pub mod transactions;
pub mod users;

#[cfg(test)]
pub mod memory;

/// 16진수 24자리 문자열을 ObjectId로 변환합니다.
///
/// 형식이 잘못된 경우 저장소를 호출하지 않고 `ValidationError`를 반환합니다.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}

/// MongoDB 오류를 기록하고 `AppError`로 변환하는 매퍼
pub(crate) fn log_db_error(action: &str) -> impl FnOnce(mongodb::error::Error) -> AppError + '_ {
    move |error| {
        log::error!("❌ {} 실패: {}", action, error);
        AppError::from(error)
    }
}
