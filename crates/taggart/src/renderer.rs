//! Tag rendering primitives.
//!
//! [`Renderer`] owns the end-tag mode for the renders it performs. Use
//! [`Renderer::global`] to follow the process-wide setting, or
//! [`Renderer::new`] for a fixed mode that no other code can change.
//!
//! ```rust
//! use taggart::{attrs, EndTagMode, Renderer};
//!
//! let html = Renderer::new(EndTagMode::Open);
//! assert_eq!(html.single("br", "line", &[]), "line<br>");
//! assert_eq!(
//!     html.wrap("h1", "Title", &[attrs! { class: "a", id: "b" }]),
//!     r#"<h1 class="a" id="b">Title</h1>"#
//! );
//! ```

use crate::attributes::{format_attributes, Attr};
use crate::catalog::{TagKind, TagSpec};
use crate::end_tag::{end_tag_status, EndTagMode};

const SCRIPT_TYPE: (&str, &str) = ("type", "text/javascript");

/// Renders tags with a fixed end-tag mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    mode: EndTagMode,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(EndTagMode::default())
    }
}

impl Renderer {
    /// Creates a renderer with its own mode. `Auto` is resolved here, once.
    pub fn new(mode: EndTagMode) -> Self {
        Self {
            mode: mode.resolve(),
        }
    }

    /// Snapshot of the process-wide mode.
    pub fn global() -> Self {
        Self {
            mode: end_tag_status(),
        }
    }

    /// The resolved mode this renderer uses.
    pub fn mode(&self) -> EndTagMode {
        self.mode
    }

    /// `<tag attrs>content</tag>`
    pub fn wrap(&self, tag: &str, content: &str, attrs: &[Attr]) -> String {
        let out = format!("<{tag}{}>{content}</{tag}>", format_attributes(attrs));
        log::trace!(target: "taggart::renderer", "wrap <{tag}>: {out}");
        out
    }

    /// `content<tag attrs />`, or without the slash in open mode.
    pub fn single(&self, tag: &str, content: &str, attrs: &[Attr]) -> String {
        let out = format!(
            "{content}<{tag}{}{}>",
            format_attributes(attrs),
            self.mode.marker()
        );
        log::trace!(target: "taggart::renderer", "single <{tag}>: {out}");
        out
    }

    /// Renders a catalog entry according to its kind.
    pub fn render(&self, spec: &TagSpec, content: &str, attrs: &[Attr]) -> String {
        match spec.kind {
            TagKind::SelfClosing => self.single(spec.tag, content, attrs),
            TagKind::Wrapping | TagKind::Special => self.wrap(spec.tag, content, attrs),
        }
    }

    /// Anchor pointing at `url`.
    ///
    /// The `href` is appended after the caller's attributes. Without a
    /// label the URL itself is the link text.
    pub fn href(&self, url: &str, label: Option<&str>, attrs: &[Attr]) -> String {
        let attrs = with_trailing(attrs, Attr::pair("href", url));
        self.wrap("a", label.unwrap_or(url), &attrs)
    }

    /// Self-closing `img` with `src` appended after the caller's attributes.
    pub fn img(&self, url: &str, attrs: &[Attr]) -> String {
        let attrs = with_trailing(attrs, Attr::pair("src", url));
        self.single("img", "", &attrs)
    }

    /// `script` tag, either referencing a `.js` file or embedding source.
    ///
    /// For a `.js` path the attribute order is `type`, the caller's
    /// attributes, then `src`, with empty content. Otherwise the text is
    /// the content and the order is `type`, then the caller's attributes.
    pub fn script(&self, source: &str, attrs: &[Attr]) -> String {
        let mut all = Vec::with_capacity(attrs.len() + 2);
        all.push(Attr::pair(SCRIPT_TYPE.0, SCRIPT_TYPE.1));
        all.extend_from_slice(attrs);
        if source.ends_with(".js") {
            all.push(Attr::pair("src", source));
            self.wrap("script", "", &all)
        } else {
            self.wrap("script", source, &all)
        }
    }
}

fn with_trailing(attrs: &[Attr], injected: Attr) -> Vec<Attr> {
    let mut all = Vec::with_capacity(attrs.len() + 1);
    all.extend_from_slice(attrs);
    all.push(injected);
    all
}
