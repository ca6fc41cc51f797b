//! Graphical primitives and the [`Element`] variant that lets any of them be a child.

use crate::encode::{Encode, push_num, push_num_attr, push_str_attr};
use crate::geom::Point;
use crate::path::Path;
use crate::presentation::Presentation;
use crate::text::Text;
use std::sync::Arc;

/// Any primitive that can appear inside a canvas, group, or anchor.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Anchor(Anchor),
    Circle(Circle),
    Ellipse(Ellipse),
    Group(Group),
    Image(Image),
    Line(Line),
    Path(Path),
    Polygon(Polygon),
    Polyline(Polyline),
    Rect(Rect),
    Text(Text),
}

impl Encode for Element {
    fn encode(&self, out: &mut String) {
        match self {
            Element::Anchor(e) => e.encode(out),
            Element::Circle(e) => e.encode(out),
            Element::Ellipse(e) => e.encode(out),
            Element::Group(e) => e.encode(out),
            Element::Image(e) => e.encode(out),
            Element::Line(e) => e.encode(out),
            Element::Path(e) => e.encode(out),
            Element::Polygon(e) => e.encode(out),
            Element::Polyline(e) => e.encode(out),
            Element::Rect(e) => e.encode(out),
            Element::Text(e) => e.encode(out),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::$ty(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    Anchor, Circle, Ellipse, Group, Image, Line, Path, Polygon, Polyline, Rect, Text,
);

pub(crate) fn encode_children(out: &mut String, children: &[Element]) {
    for c in children {
        c.encode(out);
    }
}

macro_rules! impl_with_presentation {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn with_presentation(mut self, presentation: Arc<Presentation>) -> Self {
                    self.presentation = Some(presentation);
                    self
                }
            }
        )*
    };
}

impl_with_presentation!(
    Anchor, Circle, Ellipse, Group, Image, Line, Polygon, Polyline, Rect,
);

/// An `<a>` hyperlink wrapping child elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Anchor {
    pub show: Option<String>,
    pub actuate: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
    pub children: Vec<Element>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Anchor {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Encode for Anchor {
    fn encode(&self, out: &mut String) {
        out.push_str("<a");
        push_str_attr(out, "xlink:show", self.show.as_deref());
        push_str_attr(out, "xlink:actuate", self.actuate.as_deref());
        push_str_attr(out, "xlink:href", self.href.as_deref());
        push_str_attr(out, "xlink:target", self.target.as_deref());
        self.presentation.encode(out);
        out.push('>');
        encode_children(out, &self.children);
        out.push_str("</a>");
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub presentation: Option<Arc<Presentation>>,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            presentation: None,
        }
    }
}

impl Encode for Circle {
    fn encode(&self, out: &mut String) {
        out.push_str("<circle");
        push_num_attr(out, "cx", self.cx);
        push_num_attr(out, "cy", self.cy);
        push_num_attr(out, "r", self.r);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub presentation: Option<Arc<Presentation>>,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            presentation: None,
        }
    }
}

impl Encode for Ellipse {
    fn encode(&self, out: &mut String) {
        out.push_str("<ellipse");
        push_num_attr(out, "cx", self.cx);
        push_num_attr(out, "cy", self.cy);
        push_num_attr(out, "rx", self.rx);
        push_num_attr(out, "ry", self.ry);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}

/// A `<g>` grouping element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    pub children: Vec<Element>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Group {
    pub fn new(children: Vec<Element>) -> Self {
        Self {
            children,
            presentation: None,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Encode for Group {
    fn encode(&self, out: &mut String) {
        out.push_str("<g");
        self.presentation.encode(out);
        out.push('>');
        encode_children(out, &self.children);
        out.push_str("</g>");
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    pub href: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub presentation: Option<Arc<Presentation>>,
}

impl Image {
    pub fn new(href: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            href: Some(href.into()),
            x,
            y,
            width,
            height,
            presentation: None,
        }
    }
}

impl Encode for Image {
    fn encode(&self, out: &mut String) {
        out.push_str("<image");
        push_str_attr(out, "xlink:href", self.href.as_deref());
        push_num_attr(out, "x", self.x);
        push_num_attr(out, "y", self.y);
        push_num_attr(out, "width", self.width);
        push_num_attr(out, "height", self.height);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub presentation: Option<Arc<Presentation>>,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            presentation: None,
        }
    }
}

impl Encode for Line {
    fn encode(&self, out: &mut String) {
        out.push_str("<line");
        push_num_attr(out, "x1", self.x1);
        push_num_attr(out, "y1", self.y1);
        push_num_attr(out, "x2", self.x2);
        push_num_attr(out, "y2", self.y2);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}

fn push_points(out: &mut String, points: &[Point]) {
    out.push_str(r#" points=""#);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_num(out, p.x);
        out.push(',');
        push_num(out, p.y);
    }
    out.push('"');
}

/// A closed `<polygon>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Polygon {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            presentation: None,
        }
    }
}

impl Encode for Polygon {
    fn encode(&self, out: &mut String) {
        out.push_str("<polygon");
        push_points(out, &self.points);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}

/// An open `<polyline>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Polyline {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            presentation: None,
        }
    }
}

impl Encode for Polyline {
    fn encode(&self, out: &mut String) {
        out.push_str("<polyline");
        push_points(out, &self.points);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}

/// A `<rect>`; `rx`/`ry` round the corners.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub rx: f64,
    pub ry: f64,
    pub width: f64,
    pub height: f64,
    pub presentation: Option<Arc<Presentation>>,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn rounded(mut self, rx: f64, ry: f64) -> Self {
        self.rx = rx;
        self.ry = ry;
        self
    }
}

impl Encode for Rect {
    fn encode(&self, out: &mut String) {
        out.push_str("<rect");
        push_num_attr(out, "x", self.x);
        push_num_attr(out, "y", self.y);
        push_num_attr(out, "rx", self.rx);
        push_num_attr(out, "ry", self.ry);
        push_num_attr(out, "width", self.width);
        push_num_attr(out, "height", self.height);
        self.presentation.encode(out);
        out.push_str(" />");
    }
}
