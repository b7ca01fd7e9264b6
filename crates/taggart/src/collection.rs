//! Lists, rows and tables from ordered collections.
//!
//! [`TaggableList`] holds values and nested lists. Its tag methods render
//! every element and join the results with no separator:
//!
//! ```rust
//! use taggart::{attrs, list, TaggableList};
//!
//! let items = TaggableList::from(vec!["one", "two"]);
//! assert_eq!(items.li(&[]).as_str(), "<li>one</li><li>two</li>");
//! assert_eq!(
//!     items.ol(&[attrs! { id: "steps" }]).as_str(),
//!     r#"<ol id="steps"><li>one</li><li>two</li></ol>"#
//! );
//!
//! let grid = list![["a", "b"], ["c", "d"]];
//! assert_eq!(
//!     grid.table(&[]).as_str(),
//!     "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>"
//! );
//! ```
//!
//! A nested list inside `li` or `td` is rendered with the same tag and
//! then wrapped once more, so `["one", ["nine", "eight"]]` as `td` gives
//! `<td>one</td><td><td>nine</td><td>eight</td></td>`.

use serde_json::Value;

use crate::attributes::{json_text, Attr};
use crate::renderer::Renderer;
use crate::value::Taggable;

/// One element of a [`TaggableList`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Value(Taggable),
    List(TaggableList),
}

/// An ordered, possibly nested, collection of taggable values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaggableList(Vec<Item>);

/// Builds a [`TaggableList`] with nested lists written as `[...]`.
///
/// Elements are single tokens: literals, identifiers or bracketed lists.
///
/// ```rust
/// use taggart::list;
///
/// let cells = list!["one", ["nine", "eight"], "two"];
/// assert_eq!(
///     cells.td(&[]).as_str(),
///     "<td>one</td><td><td>nine</td><td>eight</td></td><td>two</td>"
/// );
/// ```
#[macro_export]
macro_rules! list {
    (@item [$($inner:tt)*]) => {
        $crate::Item::List($crate::list![$($inner)*])
    };
    (@item $elem:expr) => {
        $crate::Item::from($elem)
    };
    ($($elem:tt),* $(,)?) => {
        $crate::TaggableList::new(vec![$($crate::list!(@item $elem)),*])
    };
}

impl TaggableList {
    pub fn new(items: Vec<Item>) -> Self {
        TaggableList(items)
    }

    /// Builds a list from JSON values.
    ///
    /// Strings, numbers and booleans become values, arrays nest. `null`
    /// and objects are skipped.
    pub fn from_json(values: &[Value]) -> Self {
        TaggableList(
            values
                .iter()
                .filter_map(|value| match value {
                    Value::Array(inner) => Some(Item::List(TaggableList::from_json(inner))),
                    Value::Null | Value::Object(_) => None,
                    other => Some(Item::Value(Taggable::new(json_text(other)))),
                })
                .collect(),
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every element as `<li>`.
    pub fn li(&self, attrs: &[Attr]) -> Taggable {
        self.li_with(&Renderer::global(), attrs)
    }

    /// Every element as `<td>`.
    pub fn td(&self, attrs: &[Attr]) -> Taggable {
        self.td_with(&Renderer::global(), attrs)
    }

    /// `<ol>` around every element as `<li>`.
    pub fn ol(&self, attrs: &[Attr]) -> Taggable {
        self.ol_with(&Renderer::global(), attrs)
    }

    /// `<ul>` around every element as `<li>`.
    pub fn ul(&self, attrs: &[Attr]) -> Taggable {
        self.ul_with(&Renderer::global(), attrs)
    }

    /// `<tr>` around every element as `<td>`.
    pub fn tr(&self, attrs: &[Attr]) -> Taggable {
        self.tr_with(&Renderer::global(), attrs)
    }

    /// A whole table.
    ///
    /// If the first element is a list, each nested list is a row and
    /// top-level values are dropped. Otherwise the list is a single row.
    pub fn table(&self, attrs: &[Attr]) -> Taggable {
        self.table_with(&Renderer::global(), attrs)
    }

    pub fn li_with(&self, renderer: &Renderer, attrs: &[Attr]) -> Taggable {
        Taggable::new(self.each(renderer, "li", attrs))
    }

    pub fn td_with(&self, renderer: &Renderer, attrs: &[Attr]) -> Taggable {
        Taggable::new(self.each(renderer, "td", attrs))
    }

    pub fn ol_with(&self, renderer: &Renderer, attrs: &[Attr]) -> Taggable {
        let items = self.each(renderer, "li", &[]);
        Taggable::new(renderer.wrap("ol", &items, attrs))
    }

    pub fn ul_with(&self, renderer: &Renderer, attrs: &[Attr]) -> Taggable {
        let items = self.each(renderer, "li", &[]);
        Taggable::new(renderer.wrap("ul", &items, attrs))
    }

    pub fn tr_with(&self, renderer: &Renderer, attrs: &[Attr]) -> Taggable {
        let cells = self.each(renderer, "td", &[]);
        Taggable::new(renderer.wrap("tr", &cells, attrs))
    }

    pub fn table_with(&self, renderer: &Renderer, attrs: &[Attr]) -> Taggable {
        let body = match self.0.first() {
            Some(Item::List(_)) => self
                .0
                .iter()
                .filter_map(|item| match item {
                    Item::List(row) => Some(row.tr_with(renderer, &[]).into_string()),
                    Item::Value(_) => None,
                })
                .collect::<String>(),
            _ => self.tr_with(renderer, &[]).into_string(),
        };
        Taggable::new(renderer.wrap("table", &body, attrs))
    }

    /// Renders each element with `tag`; nested lists are wrapped twice.
    fn each(&self, renderer: &Renderer, tag: &str, attrs: &[Attr]) -> String {
        let mut out = String::new();
        for item in &self.0 {
            match item {
                Item::Value(value) => out.push_str(&renderer.wrap(tag, value.as_str(), attrs)),
                Item::List(list) => {
                    let inner = list.each(renderer, tag, attrs);
                    out.push_str(&renderer.wrap(tag, &inner, attrs));
                }
            }
        }
        out
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Value(Taggable::from(text))
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Value(Taggable::from(text))
    }
}

impl From<Taggable> for Item {
    fn from(value: Taggable) -> Self {
        Item::Value(value)
    }
}

impl From<TaggableList> for Item {
    fn from(list: TaggableList) -> Self {
        Item::List(list)
    }
}

impl<T: Into<Item>> From<Vec<T>> for Item {
    fn from(items: Vec<T>) -> Self {
        Item::List(TaggableList::from(items))
    }
}

impl<T: Into<Item>> From<Vec<T>> for TaggableList {
    fn from(items: Vec<T>) -> Self {
        TaggableList(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Item>> FromIterator<T> for TaggableList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TaggableList(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use serde_json::json;

    fn r() -> Renderer {
        Renderer::default()
    }

    #[test]
    fn test_li_and_td_per_element() {
        let list = TaggableList::from(vec!["one", "two", "three"]);
        assert_eq!(
            list.li_with(&r(), &[]),
            "<li>one</li><li>two</li><li>three</li>"
        );
        assert_eq!(
            list.td_with(&r(), &[attrs! { class: "programmers" }]),
            concat!(
                r#"<td class="programmers">one</td>"#,
                r#"<td class="programmers">two</td>"#,
                r#"<td class="programmers">three</td>"#
            )
        );
    }

    #[test]
    fn test_nested_list_double_wrap() {
        let list = list!["one", ["nine", "eight", "seven"], "two", "three"];
        assert_eq!(
            list.td_with(&r(), &[]),
            "<td>one</td><td><td>nine</td><td>eight</td><td>seven</td></td><td>two</td><td>three</td>"
        );
    }

    #[test]
    fn test_nested_double_wrap_repeats_attributes() {
        let list = list![["a"]];
        assert_eq!(
            list.li_with(&r(), &[attrs! { class: "x" }]),
            r#"<li class="x"><li class="x">a</li></li>"#
        );
    }

    #[test]
    fn test_ol_ul_attributes_on_outer_tag_only() {
        let list = TaggableList::from(vec!["one", "two"]);
        assert_eq!(
            list.ol_with(&r(), &[attrs! { id: "o" }]),
            r#"<ol id="o"><li>one</li><li>two</li></ol>"#
        );
        assert_eq!(list.ul_with(&r(), &[]), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn test_tr_row() {
        let list = TaggableList::from(vec!["one", "two", "three"]);
        assert_eq!(
            list.tr_with(&r(), &[attrs! { id: "my_table_row" }]),
            r#"<tr id="my_table_row"><td>one</td><td>two</td><td>three</td></tr>"#
        );
    }

    #[test]
    fn test_table_flat_is_single_row() {
        let list = TaggableList::from(vec!["a", "b"]);
        assert_eq!(
            list.table_with(&r(), &[attrs! { id: "single_row" }]),
            r#"<table id="single_row"><tr><td>a</td><td>b</td></tr></table>"#
        );
    }

    #[test]
    fn test_table_rows() {
        let list = TaggableList::from(vec![vec!["one", "two"], vec!["zero", "nine"]]);
        assert_eq!(
            list.table_with(&r(), &[]),
            "<table><tr><td>one</td><td>two</td></tr><tr><td>zero</td><td>nine</td></tr></table>"
        );
    }

    #[test]
    fn test_table_rows_drop_top_level_values() {
        let list = list![["a"], "stray", ["b"]];
        assert_eq!(
            list.table_with(&r(), &[]),
            "<table><tr><td>a</td></tr><tr><td>b</td></tr></table>"
        );
    }

    #[test]
    fn test_table_flat_with_nested_later_element() {
        let list = list!["a", ["b", "c"]];
        assert_eq!(
            list.table_with(&r(), &[]),
            "<table><tr><td>a</td><td><td>b</td><td>c</td></td></tr></table>"
        );
    }

    #[test]
    fn test_empty_collections() {
        let empty = TaggableList::default();
        assert_eq!(empty.li_with(&r(), &[]), "");
        assert_eq!(empty.ol_with(&r(), &[]), "<ol></ol>");
        assert_eq!(empty.table_with(&r(), &[]), "<table><tr></tr></table>");
    }

    #[test]
    fn test_from_json() {
        let list = TaggableList::from_json(&[json!("a"), json!(1), json!(null), json!(["b"])]);
        assert_eq!(list, list!["a", "1", ["b"]]);
    }

    #[test]
    fn test_collect_and_len() {
        let list: TaggableList = ["x", "y"].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.items()[0], Item::from("x"));
    }
}
