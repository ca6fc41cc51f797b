//! `<path>` and its `d` attribute commands.

use crate::encode::{Encode, push_num};
use crate::geom::Point;
use crate::presentation::Presentation;
use std::sync::Arc;

/// The single-letter directive of a [`PathCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathDirective {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticBezierCurve,
    SmoothQuadraticBezierCurve,
    EllipticalArc,
    ClosePath,
}

impl PathDirective {
    /// The SVG path command letter. `SmoothCurveTo` shares `C` with `CurveTo`.
    pub fn code(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo | Self::SmoothCurveTo => 'C',
            Self::QuadraticBezierCurve => 'Q',
            Self::SmoothQuadraticBezierCurve => 'T',
            Self::EllipticalArc => 'A',
            Self::ClosePath => 'Z',
        }
    }
}

/// One step of a path. Every directive carries a point except [`PathDirective::ClosePath`].
#[derive(Debug, Clone, PartialEq)]
pub struct PathCommand {
    pub directive: PathDirective,
    pub point: Option<Point>,
}

impl PathCommand {
    pub fn new(directive: PathDirective, point: impl Into<Point>) -> Self {
        Self {
            directive,
            point: Some(point.into()),
        }
    }

    pub fn move_to(point: impl Into<Point>) -> Self {
        Self::new(PathDirective::MoveTo, point)
    }

    pub fn line_to(point: impl Into<Point>) -> Self {
        Self::new(PathDirective::LineTo, point)
    }

    pub fn close() -> Self {
        Self {
            directive: PathDirective::ClosePath,
            point: None,
        }
    }
}

impl Encode for PathCommand {
    fn encode(&self, out: &mut String) {
        match (self.directive, self.point) {
            (PathDirective::ClosePath, _) => out.push('Z'),
            (directive, Some(p)) => {
                out.push(directive.code());
                push_num(out, p.x);
                out.push(' ');
                push_num(out, p.y);
                out.push(' ');
            }
            (directive, None) => {
                tracing::trace!(?directive, "skipping path command without a point");
            }
        }
    }
}

/// A `<path>` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub d: Vec<PathCommand>,
    pub presentation: Option<Arc<Presentation>>,
}

impl Path {
    pub fn new(d: Vec<PathCommand>) -> Self {
        Self {
            d,
            presentation: None,
        }
    }

    /// Builds a polyline-shaped path: move to the first point, then a line to each of the rest.
    pub fn through<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let d = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathCommand::move_to(p)
                } else {
                    PathCommand::line_to(p)
                }
            })
            .collect();
        Self::new(d)
    }

    pub fn with_presentation(mut self, presentation: Arc<Presentation>) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn push(&mut self, command: PathCommand) {
        self.d.push(command);
    }
}

impl Encode for Path {
    fn encode(&self, out: &mut String) {
        out.push_str(r#"<path d=""#);
        for c in &self.d {
            c.encode(out);
        }
        out.push('"');
        self.presentation.encode(out);
        out.push_str(" />");
    }
}
