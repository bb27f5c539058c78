//! Encoding dynamic values without a concrete record type.
//!
//! Anything implementing `Serialize` works, including `serde_json::Value`
//! trees built at runtime, useful when the record comes from a config
//! store rather than a struct definition.
//!
//! Run with: cargo run --example dynamic_values

use serde_dotenv::{to_map, to_string};
use serde_json::json;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let prefs = json!({
        "HOMEBREW_EDITOR": "vim",
        "HOMEBREW_MAKE_JOBS": 8,
        "HOMEBREW_NO_ANALYTICS": true,
        "HOMEBREW_CASK_OPTS": "--appdir=~/Applications --no-quarantine",
        "proxy": {
            "http": "http://localhost:3128",
        },
    });

    println!("{}\n", to_string(&prefs)?);

    // to_map exposes the flattened entries before rendering
    let map = to_map(&prefs)?;
    println!("{} entries, nested path flattened to: proxy_http={:?}",
        map.len(),
        map.get("proxy_http").unwrap_or_default()
    );

    Ok(())
}
