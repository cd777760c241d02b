//! Access token decoding. Only the JWT payload is read; signatures are the server's business.

use super::User;
use crate::error::CommandError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    user_name: String,
    #[serde(default)]
    client_id: String,
    #[serde(default)]
    origin: String,
}

/// Decode the user from a `bearer <jwt>` access token.
///
/// An empty token yields an empty user. Client tokens have no `user_name`;
/// the client id stands in as the name.
pub fn decode_user_from_token(access_token: &str) -> Result<User, CommandError> {
    let token = access_token.trim();
    if token.is_empty() {
        return Ok(User::default());
    }

    let jwt = token
        .strip_prefix("bearer ")
        .or_else(|| token.strip_prefix("Bearer "))
        .unwrap_or(token);

    let payload = jwt
        .split('.')
        .nth(1)
        .ok_or_else(|| CommandError::Config("access token is not a JWT".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| CommandError::Config(format!("access token base64 decode failed: {e}")))?;

    let claims: TokenClaims = serde_json::from_slice(&bytes)
        .map_err(|e| CommandError::Config(format!("access token JSON decode failed: {e}")))?;

    if claims.user_name.is_empty() {
        return Ok(User {
            name: claims.client_id,
            origin: claims.origin,
            is_client: true,
        });
    }

    Ok(User {
        name: claims.user_name,
        origin: claims.origin,
        is_client: false,
    })
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("bearer {header}.{payload}.sig")
}
