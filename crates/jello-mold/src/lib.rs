//! jello Mold - min/max width emulation
//!
//! Builds nested wrapper `div`s whose inline styles give their content a
//! minimum and an optional maximum width on engines without `min-width` /
//! `max-width` support:
//!
//! ```text
//! container   padding: 0 min/2, zoom: 1, text-align
//! └─ sizer    width: N%, max-width: max-min      (only with a max width)
//!    └─ expander  margin: 0 -min/2, min-width: min
//!       └─ fixer  width: 100%                    <- content goes here
//! ```
//!
//! ```
//! use jello_dom::DomTree;
//! use jello_mold::{MoldConfig, build_mold};
//!
//! let mut tree = DomTree::new();
//! let body = tree.create_element("body");
//! tree.append_child(tree.root(), body).unwrap();
//!
//! let config = MoldConfig::new().min_width("32em").max_width("64em");
//! let mold = build_mold(&mut tree, body, &config).unwrap();
//! let heading = tree.create_text("Hello World");
//! tree.append_child(mold.content(), heading).unwrap();
//! ```

mod builder;
mod config;
mod error;
mod plan;

pub use builder::{EXPANDER_CLASS, FIXER_CLASS, Mold, SIZER_CLASS, build_mold};
pub use config::MoldConfig;
pub use error::{BuildError, ConfigError};
pub use plan::{Declarations, MoldPlan, SizerPlan};

pub use jello_css::{LengthUnit, Measure, MeasureInput, TextAlign, parse_measure};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
