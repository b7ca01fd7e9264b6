//! Attribute contributions and their serialization.
//!
//! An opening tag's attribute area is built from an ordered list of
//! [`Attr`] contributions. Each contribution is either a literal fragment,
//! spliced in verbatim, or an ordered set of `name="value"` pairs.
//!
//! ```rust
//! use taggart::{attrs, format_attributes, Attr};
//!
//! let out = format_attributes(&[attrs! { class: "a", id: "b" }, Attr::literal("hidden")]);
//! assert_eq!(out, r#" class="a" id="b" hidden"#);
//!
//! assert_eq!(format_attributes(&[]), "");
//! ```
//!
//! Values are not escaped. A value containing `"` produces broken markup.

use std::fmt::Write;

use serde_json::Value;

use crate::error::{Result, TagError};

/// A single attribute contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// Fragment inserted verbatim, e.g. `disabled` or `data-x='1'`.
    Literal(String),
    /// Name/value pairs emitted as `name="value"` in insertion order.
    Pairs(Vec<(String, String)>),
}

impl Attr {
    /// Creates a literal fragment contribution.
    pub fn literal(fragment: impl Into<String>) -> Self {
        Attr::Literal(fragment.into())
    }

    /// Creates a mapping contribution holding a single pair.
    pub fn pair(name: impl Into<String>, value: impl ToString) -> Self {
        Attr::Pairs(vec![(name.into(), value.to_string())])
    }

    /// Creates a mapping contribution from ordered pairs.
    ///
    /// Values are coerced through [`ToString`].
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Attr::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    /// Converts a dynamically-typed contribution.
    ///
    /// Strings become literal fragments and objects become mappings (key
    /// order is preserved). `null` means "absent" and yields `None`. Any
    /// other JSON kind is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::UnsupportedAttribute`] for numbers, booleans and arrays.
    pub fn from_json(value: &Value) -> Result<Option<Attr>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(Attr::Literal(s.clone()))),
            Value::Object(map) => Ok(Some(Attr::Pairs(
                map.iter()
                    .map(|(k, v)| (k.clone(), json_text(v)))
                    .collect(),
            ))),
            other => Err(TagError::UnsupportedAttribute {
                kind: json_kind(other),
            }),
        }
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Attr::Literal(fragment) => {
                out.push(' ');
                out.push_str(fragment);
            }
            Attr::Pairs(pairs) => {
                for (name, value) in pairs {
                    // Writing to a String cannot fail.
                    let _ = write!(out, " {}=\"{}\"", name, value);
                }
            }
        }
    }
}

impl From<&str> for Attr {
    fn from(fragment: &str) -> Self {
        Attr::Literal(fragment.to_string())
    }
}

impl From<String> for Attr {
    fn from(fragment: String) -> Self {
        Attr::Literal(fragment)
    }
}

impl<K: Into<String>, V: ToString> From<Vec<(K, V)>> for Attr {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Attr::pairs(pairs)
    }
}

/// Builds a mapping [`Attr`] from `name: value` or `"name" => value` pairs.
///
/// Use the quoted form for names that are not Rust identifiers.
///
/// ```rust
/// use taggart::{attrs, Attr};
///
/// assert_eq!(attrs! { class: "header" }, Attr::pair("class", "header"));
/// assert_eq!(
///     attrs! { "data-id" => 7, "aria-label" => "Close" },
///     Attr::pairs([("data-id", "7"), ("aria-label", "Close")]),
/// );
/// ```
#[macro_export]
macro_rules! attrs {
    ($($name:ident : $value:expr),* $(,)?) => {
        $crate::Attr::Pairs(vec![$((stringify!($name).to_string(), ($value).to_string())),*])
    };
    ($($name:literal => $value:expr),* $(,)?) => {
        $crate::Attr::Pairs(vec![$(($name.to_string(), ($value).to_string())),*])
    };
}

/// Serializes contributions into the text spliced after a tag name.
///
/// Each emitted piece is preceded by one space, so the result is either
/// empty or starts with exactly one space.
pub fn format_attributes(attrs: &[Attr]) -> String {
    let mut out = String::new();
    for attr in attrs {
        attr.write_to(&mut out);
    }
    out
}

/// Serializes dynamically-typed contributions.
///
/// # Errors
///
/// Fails on the first contribution [`Attr::from_json`] rejects.
pub fn format_json_attributes(values: &[Value]) -> Result<String> {
    let attrs = attrs_from_json(values)?;
    Ok(format_attributes(&attrs))
}

/// Converts dynamically-typed contributions, dropping `null` entries.
///
/// # Errors
///
/// Fails on the first contribution [`Attr::from_json`] rejects.
pub fn attrs_from_json(values: &[Value]) -> Result<Vec<Attr>> {
    let mut attrs = Vec::with_capacity(values.len());
    for value in values {
        if let Some(attr) = Attr::from_json(value)? {
            attrs.push(attr);
        }
    }
    Ok(attrs)
}

/// Textual form of a JSON value used as an attribute value.
pub(crate) fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_is_empty_string() {
        assert_eq!(format_attributes(&[]), "");
        assert_eq!(format_attributes(&[Attr::Pairs(vec![])]), "");
    }

    #[test]
    fn test_pairs_keep_insertion_order() {
        let attrs = [attrs! { id: "b", class: "a" }];
        assert_eq!(format_attributes(&attrs), r#" id="b" class="a""#);
    }

    #[test]
    fn test_literal_is_verbatim() {
        let attrs = [Attr::literal("checked"), Attr::literal("data-x='1'")];
        assert_eq!(format_attributes(&attrs), " checked data-x='1'");
    }

    #[test]
    fn test_contributions_concatenate_in_order() {
        let attrs = [
            attrs! { class: "c" },
            Attr::literal("hidden"),
            Attr::pair("href", "/p"),
        ];
        assert_eq!(format_attributes(&attrs), r#" class="c" hidden href="/p""#);
    }

    #[test]
    fn test_values_are_not_escaped() {
        let attrs = [Attr::pair("title", r#"say "hi""#)];
        assert_eq!(format_attributes(&attrs), r#" title="say "hi"""#);
    }

    #[test]
    fn test_values_coerced_to_text() {
        let attrs = [attrs! { tabindex: 3, hidden: true }];
        assert_eq!(format_attributes(&attrs), r#" tabindex="3" hidden="true""#);
    }

    #[test]
    fn test_keyword_names_in_macro() {
        let attr = attrs! { type: "text/css" };
        assert_eq!(attr, Attr::pair("type", "text/css"));
    }

    #[test]
    fn test_from_json_kinds() {
        assert_eq!(
            Attr::from_json(&json!("disabled")).unwrap(),
            Some(Attr::literal("disabled"))
        );
        assert_eq!(Attr::from_json(&json!(null)).unwrap(), None);
        assert_eq!(
            Attr::from_json(&json!({"class": "x", "colspan": 2})).unwrap(),
            Some(Attr::pairs([("class", "x"), ("colspan", "2")]))
        );
    }

    #[test]
    fn test_from_json_rejects_unsupported_kinds() {
        for value in [json!(1), json!(true), json!(["a"])] {
            let err = Attr::from_json(&value).unwrap_err();
            assert!(matches!(err, TagError::UnsupportedAttribute { .. }));
        }
    }

    #[test]
    fn test_format_json_preserves_object_order() {
        let out = format_json_attributes(&[json!({"z": "1", "a": "2"}), json!(null)]).unwrap();
        assert_eq!(out, r#" z="1" a="2""#);
    }
}
