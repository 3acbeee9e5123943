use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("Storage error: {operation} failed")]
    Storage {
        operation: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}
