//! # 거래 서비스 구현
//!
//! 거래 리포지토리를 감싸는 얇은 계층입니다. 각 작업은 리포지토리에 위임하고,
//! 실패하면 경고 로그를 남긴 뒤 에러를 그대로 전파합니다.

use std::sync::Arc;

use crate::{
    core::errors::AppResult,
    domain::{
        dto::transactions::request::{CreateTransactionRequest, EditTransactionRequest},
        entities::transactions::{Transaction, TransactionPatch},
    },
    repositories::transactions::TransactionRepository,
};

pub struct TransactionService {
    transaction_repo: Arc<dyn TransactionRepository>,
}

/// 실패 시 경고 로그를 남기고 결과를 그대로 반환합니다.
fn logged<T>(result: AppResult<T>, action: &str, target: &str) -> AppResult<T> {
    if let Err(e) = &result {
        log::warn!("{} 실패 ({}): {}", action, target, e);
    }
    result
}

impl TransactionService {
    pub fn new(transaction_repo: Arc<dyn TransactionRepository>) -> Self {
        Self { transaction_repo }
    }

    pub async fn add_transaction(
        &self,
        user_id: &str,
        request: CreateTransactionRequest,
    ) -> AppResult<Transaction> {
        let CreateTransactionRequest {
            title,
            amount,
            transaction_type,
        } = request;

        let result = self
            .transaction_repo
            .add(user_id, title, amount, transaction_type)
            .await;

        if let Ok(transaction) = &result {
            log::info!(
                "💰 거래 추가: user_id={}, type={}, amount={}",
                user_id,
                transaction.transaction_type,
                transaction.amount
            );
        }
        logged(result, "거래 추가", user_id)
    }

    /// 사용자의 활성 거래 전체
    pub async fn get_transactions(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        logged(
            self.transaction_repo.list(user_id).await,
            "거래 목록 조회",
            user_id,
        )
    }

    pub async fn get_income_transactions(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        logged(
            self.transaction_repo.list_income(user_id).await,
            "수입 목록 조회",
            user_id,
        )
    }

    pub async fn get_expense_transactions(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        logged(
            self.transaction_repo.list_expense(user_id).await,
            "지출 목록 조회",
            user_id,
        )
    }

    /// 거래 소프트 삭제
    pub async fn delete_transaction(&self, transaction_id: &str) -> AppResult<Transaction> {
        let result = self.transaction_repo.soft_delete(transaction_id).await;
        if result.is_ok() {
            log::info!("🗑️ 거래 삭제: {}", transaction_id);
        }
        logged(result, "거래 삭제", transaction_id)
    }

    /// 거래 부분 수정
    pub async fn edit_transaction(
        &self,
        transaction_id: &str,
        request: EditTransactionRequest,
    ) -> AppResult<Transaction> {
        let patch = TransactionPatch::from(request);
        logged(
            self.transaction_repo.edit(transaction_id, patch).await,
            "거래 수정",
            transaction_id,
        )
    }

    /// 삭제된 거래 복구
    pub async fn recover_transaction(&self, transaction_id: &str) -> AppResult<Transaction> {
        let result = self.transaction_repo.recover(transaction_id).await;
        if result.is_ok() {
            log::info!("♻️ 거래 복구: {}", transaction_id);
        }
        logged(result, "거래 복구", transaction_id)
    }
}
