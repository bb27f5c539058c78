//! Customizing sequence separators with DotenvOptions.
//!
//! Run with: cargo run --example custom_separators

use serde::Serialize;
use serde_dotenv::{to_string, to_string_with_options, DotenvOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct Prefs {
    homebrew_allowed_taps: Vec<String>,
    homebrew_no_cleanup_formulae: Vec<String>,
    #[serde(rename = "no_proxy")]
    no_proxy: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let prefs = Prefs {
        homebrew_allowed_taps: vec!["homebrew/core".to_string(), "homebrew/cask".to_string()],
        homebrew_no_cleanup_formulae: vec!["git".to_string(), "curl".to_string()],
        no_proxy: vec!["localhost".to_string(), "127.0.0.1".to_string()],
    };

    // Default: every sequence joins with a single space
    println!("Default (space):");
    println!("{}\n", to_string(&prefs)?);

    // Homebrew expects two of these lists comma-separated
    println!("With per-key overrides:");
    let options = DotenvOptions::new()
        .with_separator("HOMEBREW_NO_CLEANUP_FORMULAE", ",")
        .with_separator("no_proxy", ",");
    println!("{}", to_string_with_options(&prefs, options)?);

    Ok(())
}
