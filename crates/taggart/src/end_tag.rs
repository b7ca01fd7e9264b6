//! End-tag mode for self-closing tags.
//!
//! Self-closing tags such as `<br>` render either XHTML style (`<br />`)
//! or HTML style (`<br>`). The process-wide setting is read by every
//! render that goes through [`Renderer::global`](crate::Renderer::global).
//!
//! ```rust
//! use taggart::{close_ending_tag, end_tag_status, open_ending_tag, EndTagMode};
//!
//! open_ending_tag();
//! assert_eq!(end_tag_status(), EndTagMode::Open);
//!
//! close_ending_tag();
//! assert_eq!(end_tag_status(), EndTagMode::Closed);
//! ```
//!
//! The global starts out [`EndTagMode::Closed`] and only the setters
//! change it.
//!
//! # Auto Detection
//!
//! [`EndTagMode::Auto`] is resolved by checking the `TAGGART_END_TAG`
//! environment variable at the moment it is handed to a setter or to
//! [`Renderer::new`](crate::Renderer::new). `open` or `html` selects open
//! endings; anything else, or no variable, selects closed. The environment
//! is never consulted on its own.
//!
//! # Concurrency
//!
//! The global value sits behind a mutex and each render reads it once, so a
//! single tag never mixes modes. Toggling from several threads still races
//! at the level of "which mode does the next render see". Code that needs
//! a stable mode should hold its own [`Renderer`](crate::Renderer).

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Environment variable consulted when resolving [`EndTagMode::Auto`].
pub const END_TAG_ENV: &str = "TAGGART_END_TAG";

/// How self-closing tags are terminated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndTagMode {
    /// `<br />`
    #[default]
    Closed,
    /// `<br>`
    Open,
    /// Resolve from the `TAGGART_END_TAG` environment variable.
    Auto,
}

impl EndTagMode {
    /// Resolves `Auto` against the environment. Never returns `Auto`.
    pub fn resolve(self) -> EndTagMode {
        match self {
            EndTagMode::Auto => resolve_auto(),
            other => other,
        }
    }

    /// Text inserted before `>` on a self-closing tag.
    pub fn marker(self) -> &'static str {
        match self.resolve() {
            EndTagMode::Open => "",
            _ => " /",
        }
    }

    /// Returns `true` if this mode resolves to closed endings.
    pub fn is_closed(self) -> bool {
        self.resolve() == EndTagMode::Closed
    }

    /// Returns `true` if this mode resolves to open endings.
    pub fn is_open(self) -> bool {
        self.resolve() == EndTagMode::Open
    }
}

impl fmt::Display for EndTagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndTagMode::Closed => "closed",
            EndTagMode::Open => "open",
            EndTagMode::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for EndTagMode {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closed" | "close" | "xhtml" => Ok(EndTagMode::Closed),
            "open" | "html" => Ok(EndTagMode::Open),
            "auto" => Ok(EndTagMode::Auto),
            _ => Err(TagError::InvalidEndTagMode(s.to_string())),
        }
    }
}

static END_TAG_MODE: Lazy<Mutex<EndTagMode>> = Lazy::new(|| Mutex::new(EndTagMode::Closed));

/// Sets the process-wide mode. Takes effect for the next render.
///
/// `Auto` is resolved here, so the stored mode is always `Closed` or `Open`.
pub fn set_end_tag_mode(mode: EndTagMode) {
    let mode = mode.resolve();
    let mut guard = END_TAG_MODE.lock().unwrap_or_else(PoisonError::into_inner);
    log::debug!(target: "taggart::end_tag", "end-tag mode {} -> {}", *guard, mode);
    *guard = mode;
}

/// Switches self-closing tags to `<br />`.
pub fn close_ending_tag() {
    set_end_tag_mode(EndTagMode::Closed);
}

/// Switches self-closing tags to `<br>`.
pub fn open_ending_tag() {
    set_end_tag_mode(EndTagMode::Open);
}

/// Current process-wide mode. Never returns `Auto`.
pub fn end_tag_status() -> EndTagMode {
    *END_TAG_MODE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns `true` if self-closing tags currently render as `<br />`.
pub fn is_closed() -> bool {
    end_tag_status() == EndTagMode::Closed
}

/// Returns `true` if self-closing tags currently render as `<br>`.
pub fn is_open() -> bool {
    end_tag_status() == EndTagMode::Open
}

fn resolve_auto() -> EndTagMode {
    match std::env::var(END_TAG_ENV) {
        Ok(val) if val.eq_ignore_ascii_case("open") || val.eq_ignore_ascii_case("html") => {
            EndTagMode::Open
        }
        _ => EndTagMode::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(EndTagMode::default(), EndTagMode::Closed);
    }

    #[test]
    #[serial]
    fn test_auto_defaults_to_closed() {
        std::env::remove_var(END_TAG_ENV);
        set_end_tag_mode(EndTagMode::Auto);
        assert_eq!(end_tag_status(), EndTagMode::Closed);
        close_ending_tag();
    }

    #[test]
    #[serial]
    fn test_auto_resolved_when_set() {
        std::env::set_var(END_TAG_ENV, "open");
        set_end_tag_mode(EndTagMode::Auto);
        std::env::remove_var(END_TAG_ENV);
        assert_eq!(end_tag_status(), EndTagMode::Open);
        close_ending_tag();
    }

    #[test]
    #[serial]
    fn test_auto_reads_env_var() {
        std::env::set_var(END_TAG_ENV, "HTML");
        assert_eq!(EndTagMode::Auto.resolve(), EndTagMode::Open);
        std::env::set_var(END_TAG_ENV, "closed");
        assert_eq!(EndTagMode::Auto.resolve(), EndTagMode::Closed);
        std::env::remove_var(END_TAG_ENV);
    }

    #[test]
    #[serial]
    fn test_setters_and_predicates() {
        open_ending_tag();
        assert_eq!(end_tag_status(), EndTagMode::Open);
        assert!(is_open());
        assert!(!is_closed());

        close_ending_tag();
        assert_eq!(end_tag_status(), EndTagMode::Closed);
        assert!(is_closed());
        assert!(!is_open());
    }

    #[test]
    fn test_marker() {
        assert_eq!(EndTagMode::Closed.marker(), " /");
        assert_eq!(EndTagMode::Open.marker(), "");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Open".parse::<EndTagMode>().unwrap(), EndTagMode::Open);
        assert_eq!("xhtml".parse::<EndTagMode>().unwrap(), EndTagMode::Closed);
        assert_eq!(EndTagMode::Auto.to_string(), "auto");
        assert!(matches!(
            "half".parse::<EndTagMode>(),
            Err(TagError::InvalidEndTagMode(_))
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&EndTagMode::Closed).unwrap();
        assert_eq!(json, "\"closed\"");
        let mode: EndTagMode = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(mode, EndTagMode::Open);
    }
}
