// Identity layer - resolves "who is the current user" for the domain
//
// The authentication backend and the persistence backend sit behind the
// AuthenticationSession and UserRepository traits so either can be swapped
// per deployment. Only the user identifier crosses the boundary between
// them; external session types never leak into domain code.

pub mod principal;
pub mod provider;
pub mod repository;
pub mod session;

pub use principal::SessionPrincipal;
pub use provider::{IdentityProvider, SessionIdentityProvider};
pub use repository::UserRepository;
pub use session::{AuthenticationSession, BearerSession};

#[cfg(test)]
mod provider_test;
