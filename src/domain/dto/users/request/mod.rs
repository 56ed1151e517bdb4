pub mod create_user;
pub mod find_user;

pub use create_user::CreateUserRequest;
pub use find_user::UserEmailQuery;
