use thiserror::Error;

use crate::errors::LookupError;

/// Failures from current-user resolution
///
/// `NotAuthenticated` is the only error the identity provider originates
/// itself. Repository failures pass through transparent and unaltered.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No authenticated session")]
    NotAuthenticated,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
