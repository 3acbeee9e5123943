// Providers layer - work performers shared across endpoints
pub mod crypto_provider;
pub mod token_provider;

pub use crypto_provider::{CryptoError, CryptoProvider};
pub use token_provider::{TokenError, TokenProvider};
