pub mod transaction_response;

pub use transaction_response::TransactionResponse;
