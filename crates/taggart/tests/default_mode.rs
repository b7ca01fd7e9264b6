//! The process-wide end-tag mode before any setter runs.
//!
//! Kept in its own test binary so nothing else touches the global first.

use taggart::{end_tag_status, taggart, EndTagMode, Renderer, END_TAG_ENV};

#[test]
fn test_fresh_global_is_closed_regardless_of_env() {
    std::env::set_var(END_TAG_ENV, "open");

    assert_eq!(end_tag_status(), EndTagMode::Closed);
    assert_eq!(Renderer::global(), Renderer::default());
    assert_eq!(taggart("x").br(&[]), "x<br />");

    std::env::remove_var(END_TAG_ENV);
}
