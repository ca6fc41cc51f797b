#![forbid(unsafe_code)]

//! `svgplot-core` holds the SVG markup primitives used by `svgplot`.
//!
//! Every primitive implements [`Encode`], which appends its complete element text (children
//! included) to a `String` sink. Encoding never fails: absent optional attributes are simply not
//! written.
//!
//! ```
//! use svgplot_core::{Canvas, Circle, Encode, Presentation};
//! use std::sync::Arc;
//!
//! let style = Arc::new(Presentation::new().fill("red"));
//! let canvas = Canvas::new(10.0, 10.0).child(Circle::new(5.0, 5.0, 4.0).with_presentation(style));
//! assert!(canvas.to_svg_string().contains(r#"<circle cx="5.00" cy="5.00" r="4.00" fill="red" />"#));
//! ```

pub mod canvas;
pub mod element;
pub mod encode;
pub mod geom;
pub mod path;
pub mod presentation;
pub mod text;

pub use canvas::Canvas;
pub use element::{Anchor, Circle, Element, Ellipse, Group, Image, Line, Polygon, Polyline, Rect};
pub use encode::Encode;
pub use geom::{Point, point};
pub use path::{Path, PathCommand, PathDirective};
pub use presentation::Presentation;
pub use text::{Text, TextSpan};

/// Namespace declared on the root `<svg>` element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Namespace backing the `xlink:*` attributes of anchors and images.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
