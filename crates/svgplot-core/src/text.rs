//! `<text>` and its `<tspan>` runs.

use crate::encode::{Encode, push_escaped, push_num_attr};
use crate::geom::Point;
use crate::presentation::Presentation;
use std::sync::Arc;

/// A `<text>` element. `content` is written first, followed by each span in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub point: Point,
    pub content: String,
    pub spans: Vec<TextSpan>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Text {
    pub fn new(point: impl Into<Point>, content: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn span(mut self, span: TextSpan) -> Self {
        self.spans.push(span);
        self
    }

    pub fn with_presentation(mut self, presentation: Arc<Presentation>) -> Self {
        self.presentation = Some(presentation);
        self
    }
}

impl Encode for Text {
    fn encode(&self, out: &mut String) {
        out.push_str("<text");
        push_num_attr(out, "x", self.point.x);
        push_num_attr(out, "y", self.point.y);
        self.presentation.encode(out);
        out.push('>');
        push_escaped(out, &self.content);
        for span in &self.spans {
            span.encode(out);
        }
        out.push_str("</text>");
    }
}

/// A `<tspan>` run inside a [`Text`], optionally shifted by `dx`/`dy`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSpan {
    pub dx: Option<f64>,
    pub dy: Option<f64>,
    pub content: String,
    pub presentation: Option<Arc<Presentation>>,
}

impl TextSpan {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = Some(dx);
        self.dy = Some(dy);
        self
    }

    pub fn with_presentation(mut self, presentation: Arc<Presentation>) -> Self {
        self.presentation = Some(presentation);
        self
    }
}

impl Encode for TextSpan {
    fn encode(&self, out: &mut String) {
        out.push_str("<tspan");
        for (name, v) in [("dx", self.dx), ("dy", self.dy)] {
            if let Some(v) = v {
                push_num_attr(out, name, v);
            }
        }
        self.presentation.encode(out);
        out.push('>');
        push_escaped(out, &self.content);
        out.push_str("</tspan>");
    }
}
