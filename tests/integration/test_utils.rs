//! Shared test utilities for integration tests
//!
//! Provides isolated `CF_HOME` directories and access tokens for session tests.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize `CF_HOME` access across all tests
/// This prevents race conditions when tests run in parallel
static CF_HOME_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with `CF_HOME` pointing at `test_dir`, restoring the previous value afterwards.
pub fn with_cf_home<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = CF_HOME_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("CF_HOME").ok();

    std::env::set_var("CF_HOME", test_dir.path());
    let result = f();

    match original {
        Some(value) => std::env::set_var("CF_HOME", value),
        None => std::env::remove_var("CF_HOME"),
    }
    result
}

/// Unsigned `bearer` JWT carrying `claims` as its payload.
pub fn access_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("bearer {}.{}.signature", header, payload)
}
