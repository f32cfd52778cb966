//! Development token command.
//!
//! Production tokens come from the identity provider; this mints a locally
//! signed token so the API can be exercised from curl or the integration
//! tests.
//!
//! # Usage
//!
//! ```bash
//! shopsmith token -u user_2abCdEf --ttl-hours 24
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPSMITH_AUTH_SECRET` - Token signing secret (must match the API's)

use secrecy::SecretString;
use thiserror::Error;

use shopsmith_api::middleware::auth::issue_token;
use shopsmith_core::UserId;

/// Errors that can occur while minting a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Token signing failed.
    #[error("Signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Mint a signed access token for a user id and print it.
///
/// # Errors
///
/// Returns `TokenError` if the signing secret is missing or signing fails.
pub fn mint(user: &str, ttl_hours: i64) -> Result<(), TokenError> {
    dotenvy::dotenv().ok();

    let secret = std::env::var("SHOPSMITH_AUTH_SECRET")
        .map(SecretString::from)
        .map_err(|_| TokenError::MissingEnvVar("SHOPSMITH_AUTH_SECRET"))?;

    let token = issue_token(&UserId::new(user), &secret, ttl_hours)?;

    // The token is the command's output, so it goes to stdout
    #[allow(clippy::print_stdout)]
    {
        println!("{token}");
    }

    Ok(())
}
