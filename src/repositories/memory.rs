//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 구현체와 같은 조건부 업데이트 규칙과 이메일 유니크 제약을 따릅니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};

use super::parse_object_id;
use super::transactions::TransactionRepository;
use super::users::UserRepository;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::transactions::{Transaction, TransactionPatch, TransactionType};
use crate::domain::entities::users::user::User;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, name: String, email: String) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == email) {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let mut user = User::new(name, email);
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: Mutex<Vec<Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 삭제 여부와 관계없이 저장된 거래 조회
    pub fn get(&self, id: &str) -> Option<Transaction> {
        let id = ObjectId::parse_str(id).ok()?;
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == Some(id))
            .cloned()
    }

    fn select(&self, predicate: impl Fn(&Transaction) -> bool) -> Vec<Transaction> {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }

    fn update_where(
        &self,
        id: &str,
        is_deleted: bool,
        update: impl FnOnce(&mut Transaction),
    ) -> AppResult<Transaction> {
        let id = parse_object_id(id)?;
        let mut transactions = self.transactions.lock().unwrap();

        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == Some(id) && t.is_deleted == is_deleted)
            .ok_or_else(|| AppError::NotFound(format!("거래를 찾을 수 없습니다: {}", id)))?;

        update(transaction);
        Ok(transaction.clone())
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn add(
        &self,
        user_id: &str,
        title: String,
        amount: f64,
        transaction_type: TransactionType,
    ) -> AppResult<Transaction> {
        let mut transaction = Transaction::new(user_id.to_string(), title, amount, transaction_type);
        transaction.id = Some(ObjectId::new());
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn list(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        Ok(self.select(|t| t.user_id == user_id && !t.is_deleted))
    }

    async fn list_income(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        Ok(self.select(|t| {
            t.user_id == user_id && !t.is_deleted && t.transaction_type == TransactionType::Income
        }))
    }

    async fn list_expense(&self, user_id: &str) -> AppResult<Vec<Transaction>> {
        Ok(self.select(|t| {
            t.user_id == user_id && !t.is_deleted && t.transaction_type == TransactionType::Expense
        }))
    }

    async fn soft_delete(&self, transaction_id: &str) -> AppResult<Transaction> {
        self.update_where(transaction_id, false, |t| {
            t.is_deleted = true;
            t.deleted_at = Some(DateTime::now());
        })
    }

    async fn edit(&self, transaction_id: &str, patch: TransactionPatch) -> AppResult<Transaction> {
        self.update_where(transaction_id, false, |t| {
            patch.apply_to(t);
            t.updated_at = Some(DateTime::now());
        })
    }

    async fn recover(&self, transaction_id: &str) -> AppResult<Transaction> {
        self.update_where(transaction_id, true, |t| {
            t.is_deleted = false;
            t.deleted_at = None;
        })
    }
}
