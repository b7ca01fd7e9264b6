//! # Taggart - HTML tags from strings
//!
//! `taggart` turns text values and ordered lists of text values into HTML
//! fragments by calling tag methods on them, so markup does not have to be
//! spelled out as string literals.
//!
//! ## Core Concepts
//!
//! - [`Taggable`]: a text value with one method per catalog tag
//! - [`TaggableList`]: an ordered, possibly nested, list that renders as
//!   list items, table cells, rows or whole tables
//! - [`Attr`]: an attribute contribution, either a literal fragment or
//!   ordered `name="value"` pairs (see [`attrs!`])
//! - [`EndTagMode`]: `<br />` or `<br>`, process-wide or per [`Renderer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use taggart::{attrs, list, taggart, TaggableList};
//!
//! assert_eq!(taggart("Hello World!").h1(&[]).as_str(), "<h1>Hello World!</h1>");
//!
//! let important = taggart("Important").span(&[attrs! { class: "important" }]);
//! assert_eq!(important.as_str(), r#"<span class="important">Important</span>"#);
//!
//! let menu = TaggableList::from(vec!["a", "b", "c"]).ul(&[]);
//! assert_eq!(menu.as_str(), "<ul><li>a</li><li>b</li><li>c</li></ul>");
//!
//! let grid = list![["r1c1", "r1c2"], ["r2c1", "r2c2"]].table(&[attrs! { id: "grid" }]);
//! assert_eq!(
//!     grid.as_str(),
//!     r#"<table id="grid"><tr><td>r1c1</td><td>r1c2</td></tr><tr><td>r2c1</td><td>r2c2</td></tr></table>"#
//! );
//! ```
//!
//! ## Tags That Are Also Text Operations
//!
//! `tr` and `sub` are tags as well as string operations (character
//! translation and substitution). [`Taggable::tr`] and [`Taggable::sub`]
//! choose by argument shape; see [`dispatch`].
//!
//! ```rust
//! use taggart::{taggart, DispatchArg};
//!
//! let swap: Vec<DispatchArg> = vec!["el".into(), "ip".into()];
//! assert_eq!(taggart("hello").tr(&swap).unwrap().as_str(), "hippo");
//! assert_eq!(taggart("Jolly").tr(&[]).unwrap().as_str(), "<tr>Jolly</tr>");
//! assert_eq!(taggart("x").sub(&[]).unwrap().as_str(), "<sub>x</sub>");
//! ```
//!
//! ## What It Does Not Do
//!
//! No escaping, parsing or validation. Text and attribute values are
//! inserted exactly as given.

mod attributes;
pub mod catalog;
mod collection;
pub mod dispatch;
mod end_tag;
mod error;
mod help;
pub mod prelude;
mod renderer;
pub mod text;
mod value;

// Error type
pub use error::{Result, TagError};

// Attribute exports
pub use attributes::{attrs_from_json, format_attributes, format_json_attributes, Attr};

// End-tag mode exports
pub use end_tag::{
    close_ending_tag, end_tag_status, is_closed, is_open, open_ending_tag, set_end_tag_mode,
    EndTagMode, END_TAG_ENV,
};

// Catalog exports
pub use catalog::{
    lookup, single_tags, special_tags, standard_tags, TagKind, TagSpec, SINGLE_TAGS,
    SPECIAL_TAGS, STANDARD_TAGS,
};

// Rendering exports
pub use collection::{Item, TaggableList};
pub use dispatch::DispatchArg;
pub use renderer::Renderer;
pub use text::Replacement;
pub use value::{taggart, Taggable};

// Informational exports
pub use help::{build, help, tags, version, BUILD, VERSION};
