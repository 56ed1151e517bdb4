//! # 사용자 관리 서비스 구현
//!
//! 사용자 생성과 이메일 기반 조회를 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               UserService               │
//! │  • 이메일 중복 사전 확인 (fast path)    │
//! │  • 이메일 조회 (없으면 NotFound)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │          dyn UserRepository             │
//! │  • email 유니크 인덱스 (최종 판단)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## 중복 이메일 처리
//!
//! 조회 후 저장은 원자적이지 않습니다. 동시에 같은 이메일로 두 요청이 들어오면
//! 둘 다 사전 확인을 통과할 수 있으며, 이때 두 번째 저장은 유니크 인덱스에 의해
//! 거부되고 같은 `ConflictError`로 보고됩니다.

use std::sync::Arc;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{dto::users::request::CreateUserRequest, entities::users::user::User},
    repositories::users::UserRepository,
};

const DUPLICATE_EMAIL: &str = "이미 사용 중인 이메일입니다";

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 생성
    ///
    /// # Errors
    ///
    /// * `ConflictError` - 이메일이 이미 사용 중인 경우 (사전 확인 또는 유니크 제약)
    /// * `DatabaseError` - 저장소 오류
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let CreateUserRequest { name, email } = request;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::warn!("중복 이메일로 사용자 생성 시도: {}", email);
            return Err(AppError::ConflictError(DUPLICATE_EMAIL.to_string()));
        }

        self.user_repo
            .create(name, email)
            .await
            .map_err(|e| match e {
                AppError::ConflictError(_) => {
                    log::warn!("유니크 제약으로 사용자 생성 거부");
                    AppError::ConflictError(DUPLICATE_EMAIL.to_string())
                }
                other => {
                    log::warn!("사용자 생성 실패: {}", other);
                    other
                }
            })
    }

    /// 이메일로 사용자 조회
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", email)))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    fn service() -> (UserService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        (UserService::new(repo.clone()), repo)
    }

    /// 사전 확인을 항상 통과시키는 저장소 (동시 생성 경합 재현)
    struct RacingUserRepository {
        inner: InMemoryUserRepository,
    }

    #[async_trait]
    impl UserRepository for RacingUserRepository {
        async fn create(&self, name: String, email: String) -> AppResult<User> {
            self.inner.create(name, email).await
        }

        async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
            Ok(None)
        }
    }

    #[actix_web::test]
    async fn test_create_then_lookup() {
        let (service, _) = service();

        let created = service
            .create_user(CreateUserRequest::new("Alice", "alice@example.com"))
            .await
            .unwrap();
        let found = service.get_user_by_email("alice@example.com").await.unwrap();

        assert!(created.id.is_some());
        assert_eq!(found, created);
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected_by_precheck() {
        let (service, repo) = service();

        service
            .create_user(CreateUserRequest::new("A", "a@example.com"))
            .await
            .unwrap();
        let second = service
            .create_user(CreateUserRequest::new("B", "a@example.com"))
            .await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));
        assert_eq!(repo.count(), 1);
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected_by_constraint() {
        let repo = Arc::new(RacingUserRepository {
            inner: InMemoryUserRepository::new(),
        });
        let service = UserService::new(repo.clone());

        service
            .create_user(CreateUserRequest::new("A", "a@example.com"))
            .await
            .unwrap();
        let second = service
            .create_user(CreateUserRequest::new("B", "a@example.com"))
            .await;

        match second {
            Err(AppError::ConflictError(message)) => assert_eq!(message, DUPLICATE_EMAIL),
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(repo.inner.count(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_email_is_not_found() {
        let (service, _) = service();

        let result = service.get_user_by_email("nobody@example.com").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
