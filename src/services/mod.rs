pub mod api_client;
pub mod token_store;

pub use api_client::{ApiClient, RequestError};
pub use token_store::{LocalStorageTokenStore, TokenStore};
