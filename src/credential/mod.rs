//! Session credentials
//!
//! The credential endpoint mints an opaque token for a participant in a
//! room. The token is never inspected here; it is handed to the media
//! session as-is.

mod client;
mod token;

pub use client::{CredentialFetchError, CredentialProvider, HttpCredentialClient, StaticCredentials};
pub use token::{Credential, TokenRequest};
