//! Auth endpoints: login, logout, and session introspection.
//!
//! Login failures are deliberately opaque. The handler returns one generic
//! `401` for every cause (malformed RUT, unknown RUT, wrong password) and
//! the authenticator equalizes response timing across those paths; nothing
//! here may reintroduce a distinguishable signal.

pub mod login;
pub mod session;
pub(crate) mod storage;
pub mod types;
mod utils;

pub(crate) use session::authenticate_session;
