//! The root `<svg>` element.

use crate::element::{Element, encode_children};
use crate::encode::{Encode, push_num_attr};
use crate::presentation::Presentation;
use crate::{SVG_NAMESPACE, XLINK_NAMESPACE};
use std::sync::Arc;

/// Top-level container: canvas size, presentation, and the ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub children: Vec<Element>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_presentation(mut self, presentation: Arc<Presentation>) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn push(&mut self, child: impl Into<Element>) {
        self.children.push(child.into());
    }

    /// Encodes the canvas into a byte sink such as a file or stdout.
    pub fn write_to<W: std::io::Write>(&self, mut w: W) -> std::io::Result<()> {
        w.write_all(self.to_svg_string().as_bytes())?;
        w.flush()
    }
}

impl Extend<Element> for Canvas {
    fn extend<T: IntoIterator<Item = Element>>(&mut self, iter: T) {
        self.children.extend(iter);
    }
}

impl Encode for Canvas {
    fn encode(&self, out: &mut String) {
        out.push_str(r#"<svg xmlns=""#);
        out.push_str(SVG_NAMESPACE);
        out.push_str(r#"" xmlns:xlink=""#);
        out.push_str(XLINK_NAMESPACE);
        out.push('"');
        push_num_attr(out, "width", self.width);
        push_num_attr(out, "height", self.height);
        self.presentation.encode(out);
        out.push('>');
        encode_children(out, &self.children);
        out.push_str("</svg>");
    }
}
