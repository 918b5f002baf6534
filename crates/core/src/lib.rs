//! banner-core: the version banner page
//!
//! Holds the HTML document served by the banner server: a fixed template
//! with a single `{version}` substitution point, plus the default version
//! label baked into the binary.

pub mod template;

pub use template::{DEFAULT_VERSION, PAGE_TEMPLATE, render_page};
