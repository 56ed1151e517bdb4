//! # 거래 수정 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::transactions::{TransactionPatch, TransactionType};

/// 거래 부분 수정 요청
///
/// 모든 필드는 선택 사항이며, 전달된 필드만 변경됩니다.
///
/// ```json
/// { "amount": 1500.0 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EditTransactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

impl From<EditTransactionRequest> for TransactionPatch {
    fn from(request: EditTransactionRequest) -> Self {
        Self {
            title: request.title,
            amount: request.amount,
            transaction_type: request.transaction_type,
        }
    }
}
