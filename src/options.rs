//! Configuration options for dotenv serialization.
//!
//! The one formatting decision the caller controls is how sequence fields
//! are joined into a single value. [`DotenvOptions`] carries a default
//! separator (a single space unless changed) plus per-key overrides,
//! addressed by the flattened output key.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dotenv::{to_string_with_options, DotenvOptions};
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
//! struct Prefs {
//!     homebrew_allowed_taps: Vec<String>,
//!     homebrew_no_cleanup_formulae: Vec<String>,
//! }
//!
//! let prefs = Prefs {
//!     homebrew_allowed_taps: vec!["a/tap".into(), "b/tap".into()],
//!     homebrew_no_cleanup_formulae: vec!["git".into(), "curl".into()],
//! };
//!
//! let options = DotenvOptions::new().with_separator("HOMEBREW_NO_CLEANUP_FORMULAE", ",");
//! let env = to_string_with_options(&prefs, options).unwrap();
//! assert_eq!(
//!     env,
//!     "HOMEBREW_ALLOWED_TAPS=a/tap b/tap\nHOMEBREW_NO_CLEANUP_FORMULAE=git,curl"
//! );
//! ```

use indexmap::IndexMap;

/// Configuration options for dotenv serialization.
///
/// Immutable for the lifetime of one encode call.
///
/// # Examples
///
/// ```rust
/// use serde_dotenv::DotenvOptions;
///
/// // Default: sequences join with a single space
/// let options = DotenvOptions::new();
/// assert_eq!(options.separator_for("anything"), " ");
///
/// // Per-key overrides, addressed by the flattened output key
/// let options = DotenvOptions::new()
///     .with_separator("no_proxy", ",")
///     .with_separator("HOMEBREW_NO_CLEANUP_FORMULAE", ",");
/// assert_eq!(options.separator_for("no_proxy"), ",");
/// assert_eq!(options.separator_for("HOMEBREW_ALLOWED_TAPS"), " ");
/// ```
#[derive(Clone, Debug)]
pub struct DotenvOptions {
    pub default_separator: String,
    pub separator_overrides: IndexMap<String, String>,
}

impl Default for DotenvOptions {
    fn default() -> Self {
        DotenvOptions {
            default_separator: " ".to_string(),
            separator_overrides: IndexMap::new(),
        }
    }
}

impl DotenvOptions {
    /// Creates default options (space-joined sequences, no overrides).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator used for sequence keys without an override.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dotenv::DotenvOptions;
    ///
    /// let options = DotenvOptions::new().with_default_separator(":");
    /// assert_eq!(options.separator_for("PATH"), ":");
    /// ```
    #[must_use]
    pub fn with_default_separator(mut self, separator: impl Into<String>) -> Self {
        self.default_separator = separator.into();
        self
    }

    /// Adds a separator override for one flattened key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dotenv::DotenvOptions;
    ///
    /// let options = DotenvOptions::new().with_separator("no_proxy", ",");
    /// assert_eq!(options.separator_for("no_proxy"), ",");
    /// ```
    #[must_use]
    pub fn with_separator(mut self, key: impl Into<String>, separator: impl Into<String>) -> Self {
        self.separator_overrides.insert(key.into(), separator.into());
        self
    }

    /// Resolves the join separator for a flattened key.
    #[must_use]
    pub fn separator_for(&self, key: &str) -> &str {
        self.separator_overrides
            .get(key)
            .map(String::as_str)
            .unwrap_or(&self.default_separator)
    }
}
