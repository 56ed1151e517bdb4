pub mod create_transaction;
pub mod edit_transaction;

pub use create_transaction::CreateTransactionRequest;
pub use edit_transaction::EditTransactionRequest;
