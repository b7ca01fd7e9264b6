//! Version information and human-readable help.

use std::fmt::Write;

use crate::catalog::{SINGLE_TAGS, SPECIAL_TAGS, STANDARD_TAGS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier.
pub const BUILD: &str = "011";

pub fn version() -> &'static str {
    VERSION
}

pub fn build() -> &'static str {
    BUILD
}

/// Welcome text with short usage examples.
pub fn help() -> String {
    format!(
        "Welcome to Taggart ({VERSION} Build {BUILD})
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
Taggart turns a string (or a list of strings) into one or more HTML tags
by calling the tag method on it.
Examples:
  taggart(\"Hello World!\").h1(&[])  -->  <h1>Hello World!</h1>
  taggart(\"Important\").span(&[attrs! {{ class: \"important\" }}])
                     -->  <span class=\"important\">Important</span>
  taggart(\"Break\").br(&[])         -->  Break<br />
  list![\"a\", \"b\", \"c\"].ul(&[])   -->  <ul><li>a</li><li>b</li><li>c</li></ul>

For a list of tags see taggart::tags().
Other informational stuff:
  - Version:  taggart::VERSION
  - Build:    taggart::BUILD
"
    )
}

/// Categorised listing of every tag the crate can render.
pub fn tags() -> String {
    let mut out = String::from(
        "Taggart's tags:
~~~~~~~~~~~~~~~
This is a list of the tags that Taggart can generate.

Standard tags:
--------------
These tags have a start- and end-tag and take any number of
attribute contributions.
",
    );
    out.push_str(&column_list(STANDARD_TAGS));

    out.push_str(
        "Special tags
------------
These tags behave like the standard tags, but their natural method name
is taken by a text operation, so the method has a different name. Calling
tr or sub on a value picks the tag or the text operation from the shape
of the arguments.
",
    );
    let mut special = SPECIAL_TAGS.to_vec();
    special.sort_unstable();
    for (tag, method) in special {
        let _ = writeln!(out, "  Tag: {:<6}  Method: .{method}", format!("<{tag}>"));
    }

    out.push_str(
        "
Single tags
-----------
Single tags have no end tag; <br> is one. They take attributes like the
standard tags and follow the end-tag mode (<br /> or <br>).
",
    );
    out.push_str(&column_list(SINGLE_TAGS));

    out.push_str(
        "Smart tags
----------
.img    - Turns a URL to an image into an img tag.
.href   - Turns a URL into an a tag, with an optional label and attributes.
.script - Turns a URL to a .js file into <script src=..></script>, or
          embeds script source in <script></script> tags.

List tags
---------
Render every element of a list:
   td        li

Smart list tags
---------------
.ol    - Ordered list, every element wrapped in <li>.
.ul    - Unordered list, every element wrapped in <li>.
.tr    - Table row, every element wrapped in <td>.
.table - Complete table from a flat list (one row) or a list of rows.
",
    );
    out
}

/// Sorted names, four per line, each padded to 14 columns.
fn column_list(names: &[&str]) -> String {
    const COLUMNS: usize = 4;
    const PADDING: usize = 14;

    let mut sorted = names.to_vec();
    sorted.sort_unstable();

    let mut out = String::from("  ");
    for (index, name) in sorted.iter().enumerate() {
        let _ = write!(out, "{name:<width$}", width = PADDING);
        if (index + 1) % COLUMNS == 0 {
            out.push_str("\n  ");
        }
    }
    out.push_str("\n\n");
    out
}
