//! # 거래 리포지토리 구현
//!
//! 거래 엔티티의 데이터 액세스 계층을 담당합니다.
//!
//! ## 특징
//!
//! - **소프트 삭제**: 거래는 물리적으로 삭제되지 않고 `is_deleted` 플래그로 비활성화됩니다.
//! - **조건부 업데이트**: 삭제/수정/복구는 전제 조건을 필터에 포함한
//!   `find_one_and_update` 한 번으로 처리되며, 일치하는 문서가 없으면 `NotFound`를 반환합니다.
//! - **독립 쿼리**: 수입/지출 목록은 전체 목록을 거르지 않고 각자 쿼리합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};

use super::queries;
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::transactions::{Transaction, TransactionPatch, TransactionType},
    repositories::{log_db_error, parse_object_id},
};

pub const TRANSACTIONS_COLLECTION: &str = "transactions";

/// 거래 데이터 액세스 인터페이스
///
/// 서비스 계층은 이 트레이트에만 의존하며, 구현체는 애플리케이션 시작 시 주입됩니다.
///
/// # 에러
///
/// - `ValidationError`: 잘못된 거래 ID 형식 (저장소 호출 전에 실패)
/// - `NotFound`: 조건부 업데이트의 전제 조건이 맞지 않거나 거래가 없음
/// - `DatabaseError`: MongoDB 연결/쿼리 오류
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// 새 활성 거래를 저장합니다.
    async fn add(
        &self,
        user_id: &str,
        title: String,
        amount: f64,
        transaction_type: TransactionType,
    ) -> AppResult<Transaction>;

    /// 사용자의 활성 거래 전체 (입력 순서)
    async fn list(&self, user_id: &str) -> AppResult<Vec<Transaction>>;

    /// 사용자의 활성 수입 거래
    async fn list_income(&self, user_id: &str) -> AppResult<Vec<Transaction>>;

    /// 사용자의 활성 지출 거래
    async fn list_expense(&self, user_id: &str) -> AppResult<Vec<Transaction>>;

    /// 활성 거래를 소프트 삭제합니다. 이미 삭제된 거래는 `NotFound`.
    async fn soft_delete(&self, transaction_id: &str) -> AppResult<Transaction>;

    /// 활성 거래의 전달된 필드만 수정하고 `updated_at`을 갱신합니다.
    async fn edit(&self, transaction_id: &str, patch: TransactionPatch) -> AppResult<Transaction>;

    /// 삭제된 거래를 복구합니다. 활성 거래는 `NotFound`.
    async fn recover(&self, transaction_id: &str) -> AppResult<Transaction>;
}

/// MongoDB 기반 거래 리포지토리
///
/// - **컬렉션명**: `transactions`
/// - **인덱스**: `user_id + is_deleted + type`, `created_at`(desc)
pub struct MongoTransactionRepository {
    db: Arc<Database>,
}

impl MongoTransactionRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Transaction> {
        self.db.collection::<Transaction>(TRANSACTIONS_COLLECTION)
    }

    async fn find_active(&self, filter: Document) -> AppResult<Vec<Transaction>> {
        let cursor = self
            .collection()
            .find(filter)
            .sort(queries::insertion_order())
            .await
            .map_err(log_db_error("거래 목록 조회"))?;

        cursor
            .try_collect::<Vec<_>>()
            .await
            .map_err(log_db_error("거래 목록 커서 순회"))
    }

    /// 조건부 업데이트 후 갱신된 문서를 반환합니다.
    async fn update_where(
        &self,
        filter: Document,
        update: Document,
        action: &str,
    ) -> AppResult<Transaction> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection()
            .find_one_and_update(filter, update)
            .with_options(options)
            .await
            .map_err(log_db_error(action))?;

        updated.ok_or_else(|| {
            AppError::NotFound(format!("{} 대상 거래를 찾을 수 없습니다", action))
        })
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "is_deleted": 1, "type": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_active_type".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([owner_index, created_at_index])
            .await
            .map_err(log_db_error("거래 인덱스 생성"))?;

        log::info!("📇 transactions 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for MongoTransactionRepository {
    async fn add(
        &self,
        user_id: &str,
        title: String,
        amount: f64,
        transaction_type: TransactionType,
    ) -> AppResult<Transaction> {
        let mut transaction = Transaction::new(user_id.to_string(), title, amount, transaction_type);

        let result = self
            .collection()
            .insert_one(&transaction)
            .await
            .map_err(log_db_error("거래 저장"))?;

        transaction.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 거래 ID가 ObjectId가 아닙니다".to_string())
        })?);

        log::debug!("거래 저장: user_id={}, type={}", user_id, transaction_type);
        Ok(transaction)
    }

    async fn list(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        self.find_active(queries::owned_active(user_id)).await
    }

    async fn list_income(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        self.find_active(queries::owned_active_of_type(user_id, TransactionType::Income))
            .await
    }

    async fn list_expense(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        self.find_active(queries::owned_active_of_type(user_id, TransactionType::Expense))
            .await
    }

    async fn soft_delete(&self, transaction_id: &str) -> AppResult<Transaction> {
        let id = parse_object_id(transaction_id)?;

        self.update_where(
            queries::active_by_id(id),
            queries::soft_delete_update(DateTime::now()),
            "삭제",
        )
        .await
    }

    async fn edit(&self, transaction_id: &str, patch: TransactionPatch) -> AppResult<Transaction> {
        let id = parse_object_id(transaction_id)?;

        self.update_where(
            queries::active_by_id(id),
            queries::edit_update(&patch, DateTime::now()),
            "수정",
        )
        .await
    }

    async fn recover(&self, transaction_id: &str) -> AppResult<Transaction> {
        let id = parse_object_id(transaction_id)?;

        self.update_where(queries::deleted_by_id(id), queries::recover_update(), "복구")
            .await
    }
}
