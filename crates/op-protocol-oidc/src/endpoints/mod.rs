//! Axum HTTP handlers for the OIDC endpoints.
//!
//! Handlers are thin: validation and document assembly live in the
//! protocol modules, persistence sits behind [`ApplicationStore`].

mod discovery;
mod registration;
mod state;

pub use discovery::{jwks, well_known};
pub use registration::register;
pub use state::{Application, ApplicationStore, InMemoryApplicationStore, OidcState};
