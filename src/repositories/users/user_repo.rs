//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **명시적 주입**: 데이터베이스 핸들을 생성자로 전달받습니다.
//! - **데이터 무결성**: `email` 유니크 인덱스가 중복 이메일의 최종 판단 기준입니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{Collection, IndexModel, bson::doc, options::IndexOptions};

use crate::{
    core::errors::{AppError, AppResult, is_duplicate_key},
    db::Database,
    domain::entities::users::user::User,
    repositories::log_db_error,
};

pub const USERS_COLLECTION: &str = "users";

/// 사용자 데이터 액세스 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자를 저장합니다.
    ///
    /// 이메일 유니크 제약을 위반하면 `ConflictError`를 반환합니다.
    async fn create(&self, name: String, email: String) -> AppResult<User>;

    /// 이메일 주소로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 저장소
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ConflictError**: 이메일 중복 (duplicate key, code 11000)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::{MongoUserRepository, UserRepository};
///
/// async fn user_operations(db: Arc<Database>) -> Result<(), AppError> {
///     let repo = MongoUserRepository::new(db);
///
///     let created = repo
///         .create("John".to_string(), "john@example.com".to_string())
///         .await?;
///
///     let found = repo.find_by_email("john@example.com").await?;
///     assert_eq!(found.map(|u| u.id), Some(created.id));
///     Ok(())
/// }
/// ```
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USERS_COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(log_db_error("사용자 인덱스 생성"))?;

        log::info!("📇 users 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, name: String, email: String) -> AppResult<User> {
        let mut user = User::new(name, email);

        let result = self.collection().insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
            } else {
                log_db_error("사용자 저장")(e)
            }
        })?;

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string())
        })?);

        log::info!("👤 사용자 생성: {}", user.email);
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(log_db_error("이메일로 사용자 조회"))
    }
}
