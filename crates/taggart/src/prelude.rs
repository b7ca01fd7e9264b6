//! Prelude for convenient imports.
//!
//! ```rust
//! use taggart::prelude::*;
//!
//! let cell = taggart("x").td(&[attrs! { class: "num" }]);
//! assert_eq!(cell.to_string(), r#"<td class="num">x</td>"#);
//! ```

pub use crate::{attrs, list};
pub use crate::{taggart, Attr, DispatchArg, Item, Renderer, Taggable, TaggableList};
pub use crate::{EndTagMode, TagError};
