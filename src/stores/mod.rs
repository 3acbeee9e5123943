// Stores layer - data access and repository pattern
pub mod user_store;

pub use user_store::{NewUser, UserForAuth, UserStore};
