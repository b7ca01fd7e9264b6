//! The static tag catalog.
//!
//! Every tag method on [`Taggable`](crate::Taggable) comes from the single
//! list in `with_tag_catalog!`. The same list produces the lookup table
//! used by the name-driven [`Taggable::tag`](crate::Taggable::tag) and the
//! informational tag lists, so the three can never drift apart.

use serde::Serialize;

/// How a catalog tag renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagKind {
    /// `<t>value</t>`
    Wrapping,
    /// `value<t />`
    SelfClosing,
    /// Wrapping tag whose method name differs from the tag keyword because
    /// the natural name is taken by a text operation.
    Special,
}

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TagSpec {
    /// Method name on [`Taggable`](crate::Taggable).
    pub method: &'static str,
    /// Tag keyword emitted in the markup.
    pub tag: &'static str,
    pub kind: TagKind,
}

/// Invokes `$callback!` with the full tag list.
///
/// Not a complete list of HTML elements.
macro_rules! with_tag_catalog {
    ($callback:ident) => {
        $callback! {
            wrapping: [
                h1, h2, h3, h4, h5, h6, a, title, html, head, table, thead, tfoot,
                button, fieldset, form, label, select, legend, option, textarea, body,
                blockquote, q, tbody, th, td, style, div, span, abbr, acronym, address,
                dd, dl, dt, li, ol, caption, ul, em, strong, p, tt, pre, sup, del,
                small, cite, code
            ],
            single: [br, hr, input, link, meta],
            special: [(tr, tr_tag), (sub, sub_tag)]
        }
    };
}

pub(crate) use with_tag_catalog;

macro_rules! define_catalog_tables {
    (
        wrapping: [$($w:ident),* $(,)?],
        single: [$($s:ident),* $(,)?],
        special: [$(($sp_tag:ident, $sp_method:ident)),* $(,)?]
    ) => {
        /// Tags with a start and end tag.
        pub const STANDARD_TAGS: &[&str] = &[$(stringify!($w)),*];

        /// Self-closing tags.
        pub const SINGLE_TAGS: &[&str] = &[$(stringify!($s)),*];

        /// `(tag, method)` pairs for tags whose method is renamed.
        pub const SPECIAL_TAGS: &[(&str, &str)] = &[$((stringify!($sp_tag), stringify!($sp_method))),*];

        static CATALOG: &[TagSpec] = &[
            $(TagSpec { method: stringify!($w), tag: stringify!($w), kind: TagKind::Wrapping },)*
            $(TagSpec { method: stringify!($s), tag: stringify!($s), kind: TagKind::SelfClosing },)*
            $(TagSpec { method: stringify!($sp_method), tag: stringify!($sp_tag), kind: TagKind::Special },)*
        ];
    };
}

with_tag_catalog!(define_catalog_tables);

/// All catalog entries: wrapping, then self-closing, then special.
pub fn catalog() -> &'static [TagSpec] {
    CATALOG
}

/// Finds an entry by method name or tag keyword.
pub fn lookup(name: &str) -> Option<&'static TagSpec> {
    CATALOG
        .iter()
        .find(|spec| spec.method == name || spec.tag == name)
}

/// Tags with a start and end tag, in catalog order.
pub fn standard_tags() -> Vec<&'static str> {
    STANDARD_TAGS.to_vec()
}

/// `(tag, method)` pairs for the renamed tags.
pub fn special_tags() -> Vec<(&'static str, &'static str)> {
    SPECIAL_TAGS.to_vec()
}

/// Self-closing tags, in catalog order.
pub fn single_tags() -> Vec<&'static str> {
    SINGLE_TAGS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lists_are_non_empty() {
        assert!(standard_tags().contains(&"h1"));
        assert_eq!(single_tags(), vec!["br", "hr", "input", "link", "meta"]);
        assert_eq!(special_tags(), vec![("tr", "tr_tag"), ("sub", "sub_tag")]);
    }

    #[test]
    fn test_tag_keywords_are_unique() {
        let mut seen = HashSet::new();
        for spec in catalog() {
            assert!(seen.insert(spec.tag), "duplicate tag: {}", spec.tag);
        }
    }

    #[test]
    fn test_lookup_by_method_or_tag() {
        let br = lookup("br").unwrap();
        assert_eq!(br.kind, TagKind::SelfClosing);

        let by_method = lookup("tr_tag").unwrap();
        let by_tag = lookup("tr").unwrap();
        assert_eq!(by_method, by_tag);
        assert_eq!(by_tag.kind, TagKind::Special);

        assert!(lookup("blink").is_none());
    }

    #[test]
    fn test_collision_tags_are_not_standard() {
        assert!(!STANDARD_TAGS.contains(&"tr"));
        assert!(!STANDARD_TAGS.contains(&"sub"));
    }
}
