//! Taggable text values.
//!
//! [`Taggable`] wraps a string and exposes one method per catalog tag. Every
//! method returns a new `Taggable`, so calls chain:
//!
//! ```rust
//! use taggart::{attrs, taggart};
//!
//! let link = taggart("/path/to/img.png")
//!     .img(&[attrs! { class: "thumbnail" }])
//!     .a(&[attrs! { href: "/hello/world.html" }]);
//! assert_eq!(
//!     link.as_str(),
//!     r#"<a href="/hello/world.html"><img class="thumbnail" src="/path/to/img.png" /></a>"#
//! );
//! ```

use std::fmt;
use std::ops::Add;

use serde_json::Value;

use crate::attributes::{attrs_from_json, Attr};
use crate::catalog::{lookup, with_tag_catalog};
use crate::dispatch::{dual_sub, dual_tr, DispatchArg};
use crate::error::{Result, TagError};
use crate::renderer::Renderer;
use crate::text::{literal_pattern, substitute, translate, Replacement};

/// An immutable piece of text that tag methods wrap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Taggable(String);

/// Wraps a string for tagging.
pub fn taggart(text: impl Into<String>) -> Taggable {
    Taggable::new(text)
}

macro_rules! define_tag_methods {
    (
        wrapping: [$($w:ident),* $(,)?],
        single: [$($s:ident),* $(,)?],
        special: [$(($sp_tag:ident, $sp_method:ident)),* $(,)?]
    ) => {
        impl Taggable {
            $(
                #[doc = concat!("`<", stringify!($w), ">` around this text.")]
                pub fn $w(&self, attrs: &[Attr]) -> Taggable {
                    Taggable(Renderer::global().wrap(stringify!($w), &self.0, attrs))
                }
            )*
            $(
                #[doc = concat!("`<", stringify!($s), " />` after this text.")]
                pub fn $s(&self, attrs: &[Attr]) -> Taggable {
                    Taggable(Renderer::global().single(stringify!($s), &self.0, attrs))
                }
            )*
            $(
                #[doc = concat!("`<", stringify!($sp_tag), ">` around this text.")]
                pub fn $sp_method(&self, attrs: &[Attr]) -> Taggable {
                    Taggable(Renderer::global().wrap(stringify!($sp_tag), &self.0, attrs))
                }
            )*
        }
    };
}

with_tag_catalog!(define_tag_methods);

impl Taggable {
    /// Wraps `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Taggable(text.into())
    }

    /// The wrapped text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps into the text.
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the catalog tag `name` (method name or tag keyword).
    ///
    /// # Errors
    ///
    /// Returns [`TagError::UnknownTag`] if `name` is not in the catalog.
    pub fn tag(&self, name: &str, attrs: &[Attr]) -> Result<Taggable> {
        self.tag_with(&Renderer::global(), name, attrs)
    }

    /// [`tag`](Self::tag) with an explicit renderer.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::UnknownTag`] if `name` is not in the catalog.
    pub fn tag_with(&self, renderer: &Renderer, name: &str, attrs: &[Attr]) -> Result<Taggable> {
        let spec = lookup(name).ok_or_else(|| TagError::UnknownTag(name.to_string()))?;
        Ok(Taggable(renderer.render(spec, &self.0, attrs)))
    }

    /// [`tag`](Self::tag) with dynamically-typed attribute contributions.
    ///
    /// # Errors
    ///
    /// Fails on an unknown tag or an unsupported contribution kind.
    pub fn tag_json(&self, name: &str, attrs: &[Value]) -> Result<Taggable> {
        let attrs = attrs_from_json(attrs)?;
        self.tag(name, &attrs)
    }

    /// Wrapping tag `tag` around this text, catalog or not.
    pub fn wrap(&self, tag: &str, attrs: &[Attr]) -> Taggable {
        Taggable(Renderer::global().wrap(tag, &self.0, attrs))
    }

    /// Self-closing tag `tag` after this text, catalog or not.
    pub fn single(&self, tag: &str, attrs: &[Attr]) -> Taggable {
        Taggable(Renderer::global().single(tag, &self.0, attrs))
    }

    /// Anchor pointing at this text as a URL.
    ///
    /// ```rust
    /// use taggart::{attrs, taggart};
    ///
    /// let a = taggart("/p").href(Some("L"), &[attrs! { class: "c" }]);
    /// assert_eq!(a.as_str(), r#"<a class="c" href="/p">L</a>"#);
    /// assert_eq!(taggart("/p").href(None, &[]).as_str(), r#"<a href="/p">/p</a>"#);
    /// ```
    pub fn href(&self, label: Option<&str>, attrs: &[Attr]) -> Taggable {
        Taggable(Renderer::global().href(&self.0, label, attrs))
    }

    /// Image with this text as its `src`.
    pub fn img(&self, attrs: &[Attr]) -> Taggable {
        Taggable(Renderer::global().img(&self.0, attrs))
    }

    /// Script tag referencing (`.js` suffix) or embedding this text.
    pub fn script(&self, attrs: &[Attr]) -> Taggable {
        Taggable(Renderer::global().script(&self.0, attrs))
    }

    /// Translation with two texts, otherwise a `<tr>` tag.
    ///
    /// ```rust
    /// use taggart::{taggart, DispatchArg};
    ///
    /// let args: Vec<DispatchArg> = vec!["el".into(), "ip".into()];
    /// assert_eq!(taggart("hello").tr(&args).unwrap().as_str(), "hippo");
    /// assert_eq!(taggart("Jolly").tr(&[]).unwrap().as_str(), "<tr>Jolly</tr>");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`resolve_tr`](crate::dispatch::resolve_tr).
    pub fn tr(&self, args: &[DispatchArg]) -> Result<Taggable> {
        dual_tr(&Renderer::global(), &self.0, args).map(Taggable)
    }

    /// A `<sub>` tag with a mapping or no arguments, otherwise substitution.
    ///
    /// # Errors
    ///
    /// See [`resolve_sub`](crate::dispatch::resolve_sub).
    pub fn sub(&self, args: &[DispatchArg]) -> Result<Taggable> {
        dual_sub(&Renderer::global(), &self.0, args, None).map(Taggable)
    }

    /// Substitution of the first match of `args[0]` through `callback`.
    ///
    /// A mapping or empty `args` still selects the `<sub>` tag.
    ///
    /// # Errors
    ///
    /// See [`resolve_sub`](crate::dispatch::resolve_sub).
    pub fn sub_with(
        &self,
        args: &[DispatchArg],
        callback: &dyn Fn(&str) -> String,
    ) -> Result<Taggable> {
        dual_sub(&Renderer::global(), &self.0, args, Some(callback)).map(Taggable)
    }

    /// Character translation, never a tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::InvalidRange`](crate::TagError::InvalidRange) for
    /// a reversed range such as `z-a`.
    pub fn translate(&self, from: &str, to: &str) -> Result<Taggable> {
        translate(&self.0, from, to).map(Taggable)
    }

    /// First-match substitution of a literal text, never a tag.
    ///
    /// # Errors
    ///
    /// Only fails if the pattern exceeds the regex size limit.
    pub fn substitute(&self, pattern: &str, replacement: Replacement<'_>) -> Result<Taggable> {
        let pattern = literal_pattern(pattern)?;
        Ok(Taggable(substitute(&self.0, &pattern, &replacement)))
    }
}

impl fmt::Display for Taggable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Taggable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Taggable {
    fn from(text: &str) -> Self {
        Taggable(text.to_string())
    }
}

impl From<String> for Taggable {
    fn from(text: String) -> Self {
        Taggable(text)
    }
}

impl From<Taggable> for String {
    fn from(value: Taggable) -> Self {
        value.0
    }
}

impl PartialEq<str> for Taggable {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Taggable {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Add for Taggable {
    type Output = Taggable;

    fn add(mut self, rhs: Taggable) -> Taggable {
        self.0.push_str(&rhs.0);
        self
    }
}

impl Add<&Taggable> for Taggable {
    type Output = Taggable;

    fn add(mut self, rhs: &Taggable) -> Taggable {
        self.0.push_str(&rhs.0);
        self
    }
}
