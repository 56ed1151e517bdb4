//! # 거래 추가 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::transactions::TransactionType;

/// 새로운 거래 추가 요청
///
/// 소유 사용자 ID는 요청 본문이 아닌 경로 파라미터로 전달됩니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "title": "Salary",
///   "amount": 1234.56,
///   "type": "Income"
/// }
/// ```
///
/// `amount`의 부호는 검사하지 않습니다. `type`은 `"Income"` 또는 `"Expense"`만 허용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    pub amount: f64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}
