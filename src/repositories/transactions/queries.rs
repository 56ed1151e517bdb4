//! 거래 컬렉션 쿼리 문서 빌더
//!
//! 조건부 업데이트의 전제 조건은 모두 필터 문서에 들어갑니다.
//! 전제 조건이 맞지 않으면 `find_one_and_update`가 문서를 찾지 못하고 `None`을 반환합니다.

use mongodb::bson::{Bson, DateTime, Document, doc, oid::ObjectId};

use crate::domain::entities::transactions::{TransactionPatch, TransactionType};

/// 사용자의 활성 거래 필터
pub fn owned_active(user_id: &str) -> Document {
    doc! {
        "user_id": user_id,
        "is_deleted": false,
    }
}

/// 사용자의 특정 유형 활성 거래 필터
pub fn owned_active_of_type(user_id: &str, transaction_type: TransactionType) -> Document {
    doc! {
        "user_id": user_id,
        "is_deleted": false,
        "type": transaction_type,
    }
}

/// 삭제되지 않은 거래 필터 (soft_delete, edit 전제 조건)
pub fn active_by_id(id: ObjectId) -> Document {
    doc! {
        "_id": id,
        "is_deleted": false,
    }
}

/// 삭제된 거래 필터 (recover 전제 조건)
pub fn deleted_by_id(id: ObjectId) -> Document {
    doc! {
        "_id": id,
        "is_deleted": true,
    }
}

/// 입력 순서 정렬 (`_id` 오름차순)
pub fn insertion_order() -> Document {
    doc! { "_id": 1 }
}

pub fn soft_delete_update(now: DateTime) -> Document {
    doc! {
        "$set": {
            "is_deleted": true,
            "deleted_at": now,
        }
    }
}

/// 전달된 필드와 `updated_at`만 `$set` 합니다.
pub fn edit_update(patch: &TransactionPatch, now: DateTime) -> Document {
    let mut set = Document::new();

    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(amount) = patch.amount {
        set.insert("amount", amount);
    }
    if let Some(transaction_type) = patch.transaction_type {
        set.insert("type", transaction_type);
    }
    set.insert("updated_at", now);

    doc! { "$set": set }
}

pub fn recover_update() -> Document {
    doc! {
        "$set": {
            "is_deleted": false,
            "deleted_at": Bson::Null,
        }
    }
}
