//! Basic dotenv serialization.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_dotenv::to_string;
use std::error::Error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct Settings {
    homebrew_editor: String,
    homebrew_make_jobs: u32,
    homebrew_no_analytics: bool,
    homebrew_verbose: bool,
    homebrew_browser: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings {
        homebrew_editor: "vim".to_string(),
        homebrew_make_jobs: 8,
        homebrew_no_analytics: true,
        homebrew_verbose: false,
        homebrew_browser: None,
    };

    // One line per field: true stays, false becomes empty, None disappears
    let env = to_string(&settings)?;
    println!("{}", env);

    Ok(())
}
