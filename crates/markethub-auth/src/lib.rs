//! # markethub-auth
//!
//! Authentication primitives for the Harada MarketHub platform.
//!
//! ## Modules
//!
//! - `jwt` — stateless JWT token creation and validation
//! - `password` — Argon2id password hashing

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::PasswordHasher;
