//! # tagtree-elements
//!
//! Typed sugar over [`tagtree_core::Element`]:
//!
//! - [`tags`]: one constructor per HTML/SVG element (`div()`, `img()`, ...)
//! - [`attrs`]: the [`AttributeExt`] trait with one setter pair per attribute
//!
//! Nothing here adds behavior. `div().id("x")` builds exactly what
//! `Element::new("div", false, []).attribute("id", "x")` builds.

pub mod attrs;
pub mod tags;

pub use attrs::AttributeExt;
pub use tags::*;
