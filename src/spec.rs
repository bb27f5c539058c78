//! Dotenv Output Format
//!
//! This module documents the line-oriented `KEY=VALUE` format produced by
//! this library. There is no parser: the format is write-only, aimed at
//! files a shell (or a tool like Homebrew reading `brew.env`) sources as
//! environment variables.
//!
//! # Grammar
//!
//! ```text
//! file        ::= (line ("\n" line)*)?
//! line        ::= KEY "=" VALUE
//! KEY         ::= path-segment ("_" path-segment)*
//! VALUE       ::= "" | unquoted-text | quoted-text
//! quoted-text ::= '"' escaped-char* '"'
//! ```
//!
//! No trailing newline follows the last line. An empty record produces an
//! empty file.
//!
//! # Keys
//!
//! Keys are the field names of the encoded record. Nested record fields
//! flatten into one key by joining the path segments with `_`:
//!
//! ```text
//! proxy:
//!   http: "http://localhost:3128"     →   proxy_http=http://localhost:3128
//! ```
//!
//! Because `_` is also legal inside segment names, two differently nested
//! fields can flatten to the same key (`proxy.http` vs a top-level
//! `proxy_http`). The later write replaces the earlier one. Choose field
//! names so this cannot happen; the encoder does not detect it.
//!
//! # Values
//!
//! | Input | Output |
//! |-------|--------|
//! | `true` | `KEY=true` |
//! | `false` | `KEY=` (present, empty) |
//! | absent optional | no line |
//! | integer | decimal digits, sign preserved |
//! | float | shortest round-tripping decimal form |
//! | string without whitespace | verbatim |
//! | string with whitespace | `"..."`, interior `"` escaped as `\"` |
//! | empty sequence | no line |
//! | sequence of scalars | elements joined with the resolved separator |
//!
//! `KEY=` and a missing line are deliberately different: a shell sourcing
//! the file sets the variable to the empty string in the first case and
//! leaves it unset in the second. Boolean `false` uses the first form,
//! absent optionals and empty sequences the second.
//!
//! Quoting escapes only the double-quote character. Newlines, backslashes,
//! and other control characters pass through unescaped; a value containing
//! a newline breaks the line orientation of the file and is outside what
//! the format can represent.
//!
//! # Sequence separators
//!
//! A sequence field becomes a single line whose value is the elements
//! joined with a separator. The separator is resolved per flattened key:
//! an entry in [`DotenvOptions::separator_overrides`] wins, otherwise
//! [`DotenvOptions::default_separator`] (a single space) applies.
//!
//! The motivating application writes Homebrew's `brew.env`, where most
//! list variables are space-separated but two are comma-separated:
//!
//! ```text
//! HOMEBREW_ALLOWED_TAPS=homebrew/core homebrew/cask
//! HOMEBREW_NO_CLEANUP_FORMULAE=git,curl
//! no_proxy=localhost,127.0.0.1
//! ```
//!
//! # Unsupported shapes
//!
//! The format covers records of scalars, optional scalars, nested records,
//! and flat sequences of scalars. Encoding fails (never partially emits)
//! for:
//!
//! - a bare scalar or sequence at the top level (no key to write under)
//! - sequences of sequences or sequences of records
//! - unit values and unit structs
//! - enum variants carrying data (unit variants encode as their name)
//! - map keys that are not strings
//!
//! [`DotenvOptions::separator_overrides`]: crate::DotenvOptions
//! [`DotenvOptions::default_separator`]: crate::DotenvOptions
