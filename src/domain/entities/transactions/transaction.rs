//! Transaction Entity Implementation
//!
//! 수입/지출 거래 엔티티와 소프트 삭제 생명주기를 정의합니다.
//!
//! ## 생명주기
//!
//! ```text
//!            add                 edit (updated_at 갱신)
//!   ──────────────▶ [활성] ◀──────────────┐
//!                    │  ▲                  │
//!        soft_delete │  │ recover          │
//!                    ▼  │                  │
//!                  [삭제됨] ───────────────┘ (edit 불가)
//! ```
//!
//! - `is_deleted == true` 이면 `deleted_at`이 설정되어 있고, 그 역도 성립합니다.
//! - 물리적으로 삭제되지 않습니다.

use std::fmt;

use mongodb::bson::{Bson, DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 거래 유형
///
/// 저장소와 JSON 모두 `"Income"` / `"Expense"` 문자열로 표현됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// 수입
    Income,
    /// 지출
    Expense,
}

impl TransactionType {
    /// 저장소 필터에 사용하는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TransactionType> for Bson {
    fn from(value: TransactionType) -> Self {
        Bson::String(value.as_str().to_string())
    }
}

/// 거래 엔티티
///
/// `transactions` 컬렉션의 문서와 1:1로 매핑됩니다.
/// `user_id`는 소유 사용자의 ID 문자열이며 참조 무결성은 검사하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 거래 제목
    pub title: String,
    /// 금액 (부호 있는 실수)
    pub amount: f64,
    /// 거래 유형
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// 소유 사용자 ID
    pub user_id: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 마지막 수정 시간 (수정된 적 없으면 None)
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    /// 소프트 삭제 여부
    #[serde(default)]
    pub is_deleted: bool,
    /// 소프트 삭제 시간 (`is_deleted`가 true일 때만 설정)
    #[serde(default)]
    pub deleted_at: Option<DateTime>,
}

impl Transaction {
    /// 저장 전의 새 활성 거래 생성
    pub fn new(
        user_id: String,
        title: String,
        amount: f64,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: None,
            title,
            amount,
            transaction_type,
            user_id,
            created_at: DateTime::now(),
            updated_at: None,
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 소프트 삭제 플래그와 삭제 시간이 일관적인지 확인
    pub fn is_consistent(&self) -> bool {
        self.is_deleted == self.deleted_at.is_some()
    }
}

/// 거래 부분 수정 내용
///
/// `Some`인 필드만 변경됩니다. 모든 필드가 `None`이면 수정 시간만 갱신됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionPatch {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none() && self.transaction_type.is_none()
    }

    /// 패치를 엔티티에 적용합니다. (`updated_at`은 호출자가 설정)
    pub fn apply_to(&self, transaction: &mut Transaction) {
        if let Some(title) = &self.title {
            transaction.title = title.clone();
        }
        if let Some(amount) = self.amount {
            transaction.amount = amount;
        }
        if let Some(transaction_type) = self.transaction_type {
            transaction.transaction_type = transaction_type;
        }
    }
}
