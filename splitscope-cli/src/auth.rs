use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use splitscope_core::ReportError;

use crate::state::ensure_splitscope_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthState {
    pub api_key: Option<String>,
}

pub fn auth_path() -> Result<PathBuf> {
    Ok(ensure_splitscope_home()?.join("auth.json"))
}

pub fn load_auth() -> Result<AuthState> {
    let p = auth_path()?;
    if !p.exists() {
        return Ok(AuthState::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn save_auth(auth: &AuthState) -> Result<()> {
    let p = auth_path()?;
    let s = serde_json::to_string_pretty(auth)?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// The stored key, or the structured missing-key error whose message tells
/// the user how to fix it.
pub fn require_api_key() -> Result<String> {
    Ok(load_auth()?.api_key.ok_or(ReportError::MissingApiKey)?)
}

pub fn store_api_key(key: &str) -> Result<()> {
    if key.len() < 10 || key.contains(char::is_whitespace) {
        bail!("API key didn't look valid (expected one long opaque token)");
    }
    let mut auth = load_auth()?;
    auth.api_key = Some(key.to_string());
    save_auth(&auth)?;
    Ok(())
}

fn prompt_secret(label: &str) -> Result<String> {
    // Minimal portable secret prompt: just stdin.
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn set_key() -> Result<()> {
    let key = prompt_secret("Paste Splitwise API key")?;
    store_api_key(&key)?;
    println!("Saved API key to {}", auth_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_rejects_short_or_spaced_keys() {
        assert!(store_api_key("short").is_err());
        assert!(store_api_key("two words that are long enough").is_err());
    }
}
