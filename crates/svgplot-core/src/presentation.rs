//! Shared visual styling attributes.

use crate::encode::{Encode, push_str_attr};
use serde::{Deserialize, Serialize};

/// Presentation attributes attached to a primitive or a canvas.
///
/// Fields that are `None` (or empty) are left out of the encoded element. Primitives hold a
/// presentation behind an `Arc`, so one value can style any number of elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Presentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dash_array: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<String>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, v: impl Into<String>) -> Self {
        self.color = Some(v.into());
        self
    }

    pub fn fill(mut self, v: impl Into<String>) -> Self {
        self.fill = Some(v.into());
        self
    }

    pub fn opacity(mut self, v: impl Into<String>) -> Self {
        self.opacity = Some(v.into());
        self
    }

    pub fn stroke(mut self, v: impl Into<String>) -> Self {
        self.stroke = Some(v.into());
        self
    }

    pub fn stroke_dash_array(mut self, v: impl Into<String>) -> Self {
        self.stroke_dash_array = Some(v.into());
        self
    }

    pub fn stroke_width(mut self, v: impl Into<String>) -> Self {
        self.stroke_width = Some(v.into());
        self
    }

    /// Returns `true` when encoding would write nothing.
    pub fn is_empty(&self) -> bool {
        [
            &self.color,
            &self.fill,
            &self.opacity,
            &self.stroke,
            &self.stroke_dash_array,
            &self.stroke_width,
        ]
        .iter()
        .all(|v| v.as_deref().is_none_or(str::is_empty))
    }
}

impl Encode for Presentation {
    /// Writes the attributes as ` name="value"` pairs in a fixed order.
    fn encode(&self, out: &mut String) {
        push_str_attr(out, "color", self.color.as_deref());
        push_str_attr(out, "fill", self.fill.as_deref());
        push_str_attr(out, "opacity", self.opacity.as_deref());
        push_str_attr(out, "stroke", self.stroke.as_deref());
        push_str_attr(out, "stroke-dasharray", self.stroke_dash_array.as_deref());
        push_str_attr(out, "stroke-width", self.stroke_width.as_deref());
    }
}
