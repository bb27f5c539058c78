//! # serde_dotenv
//!
//! A Serde-compatible serializer for dotenv-style `KEY=VALUE` environment
//! files.
//!
//! ## What does it produce?
//!
//! One line per field, suitable for sourcing from a shell or handing to
//! tools that read environment files (the original use case is generating
//! Homebrew's `brew.env` from a preferences record):
//!
//! ```text
//! HOMEBREW_EDITOR=vim
//! HOMEBREW_MAKE_JOBS=8
//! HOMEBREW_NO_ANALYTICS=true
//! HOMEBREW_ALLOWED_TAPS=homebrew/core homebrew/cask
//! no_proxy=localhost,127.0.0.1
//! ```
//!
//! ## Key Features
//!
//! - **Serde Compatible**: encode any `#[derive(Serialize)]` record; no
//!   per-type encoding code
//! - **Path Flattening**: nested record fields join with `_` into a single
//!   flat key (`proxy.http` → `proxy_http`)
//! - **Shell-Faithful Booleans**: `true` renders as `true`, `false` renders
//!   as an empty value (`KEY=`), and absent optionals render as nothing at
//!   all: three states a shell can distinguish
//! - **Configurable Sequence Joining**: sequences collapse into one value,
//!   space-joined by default with per-key separator overrides
//! - **Deterministic Output**: entries keep field declaration order, so the
//!   same record always produces byte-identical text
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_dotenv = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dotenv::to_string;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
//! struct Settings {
//!     editor: String,
//!     make_jobs: u32,
//!     no_analytics: bool,
//!     browser: Option<String>,
//! }
//!
//! let settings = Settings {
//!     editor: "vim".to_string(),
//!     make_jobs: 8,
//!     no_analytics: true,
//!     browser: None,
//! };
//!
//! let env = to_string(&settings).unwrap();
//! assert_eq!(env, "EDITOR=vim\nMAKE_JOBS=8\nNO_ANALYTICS=true");
//! ```
//!
//! ### Sequence Separators
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dotenv::{to_string_with_options, DotenvOptions};
//!
//! #[derive(Serialize)]
//! struct Proxies {
//!     no_proxy: Vec<String>,
//! }
//!
//! let proxies = Proxies {
//!     no_proxy: vec!["localhost".to_string(), "127.0.0.1".to_string()],
//! };
//!
//! let options = DotenvOptions::new().with_separator("no_proxy", ",");
//! let env = to_string_with_options(&proxies, options).unwrap();
//! assert_eq!(env, "no_proxy=localhost,127.0.0.1");
//! ```
//!
//! ## What is not representable
//!
//! Decoding is out of scope entirely, and the encoder rejects shapes the
//! format cannot express; see the [`spec`] module for the format rules and
//! the exhaustive list. Values never partially encode: one unsupported
//! field fails the whole record.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - Encoding a settings struct
//! - **`custom_separators.rs`** - Per-key sequence separators
//! - **`dynamic_values.rs`** - Encoding `serde_json::Value` trees
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod map;
pub mod options;
pub mod scalar;
pub mod ser;
pub mod spec;

pub use error::{Error, Result};
pub use map::EnvMap;
pub use options::DotenvOptions;
pub use ser::Serializer;

use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to dotenv text.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let env = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(env, "x=1\ny=2");
/// ```
///
/// # Errors
///
/// Returns an error if the value contains a type with no dotenv
/// representation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, DotenvOptions::default())
}

/// Serialize any `T: Serialize` to dotenv text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::{to_string_with_options, DotenvOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Prefs { tags: Vec<String> }
///
/// let prefs = Prefs { tags: vec!["a".to_string(), "b".to_string()] };
/// let options = DotenvOptions::new().with_separator("tags", ",");
/// assert_eq!(to_string_with_options(&prefs, options).unwrap(), "tags=a,b");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: DotenvOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_output())
}

/// Convert any `T: Serialize` to an [`EnvMap`] of flattened entries.
///
/// Useful when the caller wants to inspect or post-process entries before
/// rendering them as text.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::to_map;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let map = to_map(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(map.get("x"), Some("1"));
/// assert_eq!(map.len(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_map<T>(value: &T) -> Result<EnvMap>
where
    T: ?Sized + Serialize,
{
    to_map_with_options(value, DotenvOptions::default())
}

/// Convert any `T: Serialize` to an [`EnvMap`] with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_map_with_options<T>(value: &T, options: DotenvOptions) -> Result<EnvMap>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_map())
}

/// Serialize any `T: Serialize` to a writer as dotenv text.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x=1\ny=2");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, DotenvOptions::default())
}

/// Serialize any `T: Serialize` to a writer as dotenv text with custom
/// options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: DotenvOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let env_text = to_string_with_options(value, options)?;
    writer
        .write_all(env_text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
