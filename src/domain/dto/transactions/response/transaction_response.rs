use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::common::to_utc;
use crate::domain::entities::transactions::{Transaction, TransactionType};

/// 거래 응답 DTO
///
/// `updated_at`, `deleted_at`은 설정되지 않은 경우 `null`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        let Transaction {
            id,
            title,
            amount,
            transaction_type,
            user_id,
            created_at,
            updated_at,
            is_deleted,
            deleted_at,
        } = transaction;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            amount,
            transaction_type,
            user_id,
            created_at: to_utc(created_at),
            updated_at: updated_at.map(to_utc),
            is_deleted,
            deleted_at: deleted_at.map(to_utc),
        }
    }
}
