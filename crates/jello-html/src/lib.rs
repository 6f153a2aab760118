//! jello HTML - Markup output
//!
//! Turns DOM subtrees into HTML strings.

mod serializer;

pub use serializer::{HtmlSerializer, get_inner_html, get_outer_html};
