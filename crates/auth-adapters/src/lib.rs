//! Identity adapters: access-token verification and password hashing.
//! Token issuance and user registration belong to the account service and
//! are not implemented here.

mod password;

#[cfg(feature = "auth-jwt")]
mod jwt;

pub use password::hash_password;

#[cfg(feature = "auth-jwt")]
pub use jwt::JwtTokenManager;
