//! # Styles
//!
//! A small typed model of CSS used to describe the page's global stylesheet.
//!
//! * [`RuleSet`] attaches declarations to a selector, includes shared
//!   [`StyleFragment`]s and nests child rule sets (`body { img { .. } }`).
//! * [`StyleSheet`] flattens nesting into descendant selectors and renders
//!   plain CSS.
//! * [`apply_global_style`] inserts [`global_styles`] into a [`StyleHost`]
//!   once; repeated calls are no-ops.
//!
//! ## Example
//!
//! ```rust
//! use skalable_style::{Declare, Property, RuleSet, StyleSheet, px};
//!
//! let sheet = StyleSheet::new("Demo").rule(RuleSet::new("body").padding(px(8)));
//! assert_eq!(sheet.lookup("body", Property::Padding), Some("8px"));
//! ```

mod error;
mod global;
mod inject;
mod rule;
mod sheet;
mod value;

pub use crate::error::{StyleError, StyleErrorExt};
pub use crate::global::{base_img, global_styles};
pub use crate::inject::{Injection, StyleHost, apply_global_style, inject_global};
pub use crate::rule::{Declaration, Declare, RuleSet, StyleFragment};
pub use crate::sheet::{FlatRule, StyleSheet};
pub use crate::value::{Color, LinearDimension, NamedColor, Property, pct, px};
