//! Business logic services.
//!
//! - `auth` - Registration, password login and biometric login
//! - `token` - Signed bearer token issuance

pub mod auth;
pub mod token;
