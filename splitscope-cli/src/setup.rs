use anyhow::{Context, Result};
use std::io::{self, Write};

use splitscope_api::SplitwiseClient;

use crate::{auth, config};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Interactive first run:
/// - user pastes a personal Splitwise API key
/// - we verify it with one live call and list the visible groups
/// - optional default group is written to config.toml
pub async fn run_setup() -> Result<()> {
    println!("Splitscope setup\n");
    println!("You need a personal Splitwise API key:\n");
    println!("1) Go to: https://secure.splitwise.com/apps");
    println!("2) Register your application (choose the API-key option)");
    println!("3) Copy the API key\n");

    let key = prompt("Paste API key")?;
    auth::store_api_key(&key)?;

    let mut cfg = config::load_config()?;
    let client = SplitwiseClient::with_base_url(&key, &cfg.api.base_url)?;

    // Connectivity check and group listing in one call.
    let groups = client
        .groups()
        .await
        .context("verifying the API key against Splitwise")?;

    println!("\nConnected. {} groups visible:", groups.len());
    for g in &groups {
        println!("- {}", g.name);
    }

    let default_group = prompt("\nDefault group for reports (blank for none)")?;
    cfg.report.default_group = if default_group.is_empty() {
        None
    } else {
        Some(default_group)
    };
    config::save_config(&cfg)?;

    println!("\nWrote:");
    println!("- {}", auth::auth_path()?.display());
    println!("- {}", config::config_path()?.display());

    println!("\nNext recommended steps:");
    println!("- splitscope report                (this month, default group)");
    println!("- splitscope report --month 3      (a specific month)");
    println!("- splitscope dashboard             (full-screen view)");

    Ok(())
}
