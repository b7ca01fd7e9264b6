//! Resolution of `tr` and `sub`, which are both tags and text operations.
//!
//! A call is classified purely by the shape of its arguments:
//!
//! | call | arguments | meaning |
//! |------|-----------|---------|
//! | `tr` | two texts | [`translate`](crate::text::translate) |
//! | `tr` | anything else | `<tr>` tag, first argument as attributes |
//! | `sub` | mapping first | `<sub>` tag with that mapping |
//! | `sub` | none | `<sub>` tag |
//! | `sub` | anything else | [`substitute`](crate::text::substitute) |
//!
//! ```rust
//! use taggart::dispatch::{resolve_tr, DispatchArg, TrCall};
//!
//! let args: Vec<DispatchArg> = vec![DispatchArg::from("el"), DispatchArg::from("ip")];
//! assert!(matches!(resolve_tr(&args).unwrap(), TrCall::Translate { .. }));
//! assert!(matches!(resolve_tr(&[]).unwrap(), TrCall::Tag(None)));
//! ```

use std::collections::HashMap;

use regex::Regex;

use crate::attributes::Attr;
use crate::error::{Result, TagError};
use crate::renderer::Renderer;
use crate::text::{literal_pattern, substitute, translate, Replacement};

/// One positional argument to a dual-dispatch call.
#[derive(Debug, Clone)]
pub enum DispatchArg {
    /// Plain text.
    Text(String),
    /// Ordered name/value mapping.
    Mapping(Vec<(String, String)>),
    /// Compiled regular expression.
    Pattern(Regex),
}

impl DispatchArg {
    fn kind(&self) -> &'static str {
        match self {
            DispatchArg::Text(_) => "text",
            DispatchArg::Mapping(_) => "mapping",
            DispatchArg::Pattern(_) => "pattern",
        }
    }

    /// Reads this argument as an attribute contribution.
    fn to_attr(&self) -> Result<Attr> {
        match self {
            DispatchArg::Text(fragment) => Ok(Attr::Literal(fragment.clone())),
            DispatchArg::Mapping(pairs) => Ok(Attr::Pairs(pairs.clone())),
            DispatchArg::Pattern(_) => Err(TagError::UnsupportedAttribute { kind: "pattern" }),
        }
    }
}

impl From<&str> for DispatchArg {
    fn from(text: &str) -> Self {
        DispatchArg::Text(text.to_string())
    }
}

impl From<String> for DispatchArg {
    fn from(text: String) -> Self {
        DispatchArg::Text(text)
    }
}

impl From<Regex> for DispatchArg {
    fn from(pattern: Regex) -> Self {
        DispatchArg::Pattern(pattern)
    }
}

impl From<Attr> for DispatchArg {
    fn from(attr: Attr) -> Self {
        match attr {
            Attr::Literal(fragment) => DispatchArg::Text(fragment),
            Attr::Pairs(pairs) => DispatchArg::Mapping(pairs),
        }
    }
}

/// Resolved meaning of a `tr` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrCall<'a> {
    /// Character translation.
    Translate { from: &'a str, to: &'a str },
    /// `<tr>` tag with optional attributes.
    Tag(Option<Attr>),
}

/// Resolved meaning of a `sub` call.
#[derive(Debug)]
pub enum SubCall<'a> {
    /// `<sub>` tag with optional attributes.
    Tag(Option<Attr>),
    /// First-match substitution.
    Substitute {
        pattern: Regex,
        replacement: Replacement<'a>,
    },
}

/// Classifies a `tr` call.
///
/// # Errors
///
/// In the tag form, a pattern as first argument is not an attribute
/// contribution and yields [`TagError::UnsupportedAttribute`].
pub fn resolve_tr(args: &[DispatchArg]) -> Result<TrCall<'_>> {
    let call = match args {
        [DispatchArg::Text(from), DispatchArg::Text(to)] => TrCall::Translate { from, to },
        [] => TrCall::Tag(None),
        [first, ..] => TrCall::Tag(Some(first.to_attr()?)),
    };
    log::debug!(target: "taggart::dispatch", "tr with {} args -> {:?}", args.len(), call);
    Ok(call)
}

/// Classifies a `sub` call.
///
/// A callback, when given, takes precedence over a replacement argument.
/// A plain-text pattern matches literally.
///
/// # Errors
///
/// - [`TagError::MissingReplacement`] when substitution is selected with
///   neither a second argument nor a callback.
/// - [`TagError::InvalidReplacement`] when the second argument is a pattern.
pub fn resolve_sub<'a>(
    args: &[DispatchArg],
    callback: Option<&'a dyn Fn(&str) -> String>,
) -> Result<SubCall<'a>> {
    let call = match args {
        [] => SubCall::Tag(None),
        [DispatchArg::Mapping(pairs), ..] => SubCall::Tag(Some(Attr::Pairs(pairs.clone()))),
        [DispatchArg::Pattern(re), rest @ ..] => substitution(re.clone(), rest, callback)?,
        [DispatchArg::Text(text), rest @ ..] => {
            substitution(literal_pattern(text)?, rest, callback)?
        }
    };
    log::debug!(target: "taggart::dispatch", "sub with {} args -> {:?}", args.len(), call);
    Ok(call)
}

fn substitution<'a>(
    pattern: Regex,
    rest: &[DispatchArg],
    callback: Option<&'a dyn Fn(&str) -> String>,
) -> Result<SubCall<'a>> {
    let replacement = match (callback, rest.first()) {
        (Some(callback), _) => Replacement::Callback(callback),
        (None, Some(DispatchArg::Text(template))) => Replacement::Template(template.clone()),
        (None, Some(DispatchArg::Mapping(pairs))) => {
            Replacement::Lookup(pairs.iter().cloned().collect::<HashMap<_, _>>())
        }
        (None, Some(other @ DispatchArg::Pattern(_))) => {
            return Err(TagError::InvalidReplacement { kind: other.kind() })
        }
        (None, None) => return Err(TagError::MissingReplacement),
    };
    Ok(SubCall::Substitute {
        pattern,
        replacement,
    })
}

/// Runs `tr` on `text`: translation or a `<tr>` tag.
///
/// # Errors
///
/// See [`resolve_tr`]. The translation form also fails on a reversed
/// range, with [`TagError::InvalidRange`].
pub fn dual_tr(renderer: &Renderer, text: &str, args: &[DispatchArg]) -> Result<String> {
    Ok(match resolve_tr(args)? {
        TrCall::Translate { from, to } => translate(text, from, to)?,
        TrCall::Tag(attr) => renderer.wrap("tr", text, attr.as_slice()),
    })
}

/// Runs `sub` on `text`: substitution or a `<sub>` tag.
///
/// # Errors
///
/// See [`resolve_sub`].
pub fn dual_sub(
    renderer: &Renderer,
    text: &str,
    args: &[DispatchArg],
    callback: Option<&dyn Fn(&str) -> String>,
) -> Result<String> {
    Ok(match resolve_sub(args, callback)? {
        SubCall::Tag(attr) => renderer.wrap("sub", text, attr.as_slice()),
        SubCall::Substitute {
            pattern,
            replacement,
        } => substitute(text, &pattern, &replacement),
    })
}
