use serde::{Deserialize, Serialize};
use validator::Validate;

/// 이메일로 사용자 조회 쿼리 (`GET /api/v1/users?email=...`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserEmailQuery {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}
