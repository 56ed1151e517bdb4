//! 공통 응답 래퍼와 변환 유틸리티

use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};

/// 성공 응답 봉투(envelope)
///
/// 모든 성공 응답은 `{ "message": ..., "data": ... }` 형태로 반환됩니다.
/// 실패 응답은 [`crate::core::errors::AppError`]가 `{ "error": ... }` 형태로 만듭니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// BSON 시간을 UTC chrono 시간으로 변환
pub(crate) fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
