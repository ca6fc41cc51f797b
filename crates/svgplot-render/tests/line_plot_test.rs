use std::sync::Arc;
use svgplot_core::{Canvas, Element, Encode, Line, Path, PathCommand, Presentation};
use svgplot_render::{GridStyle, PlotOptions, PlotPoint, render_line, render_line_with, sample};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Reading {
    t: f64,
    value: f64,
}

impl PlotPoint for Reading {
    fn x(&self) -> f64 {
        self.t
    }

    fn y(&self) -> f64 {
        self.value
    }
}

fn readings(raw: &[(f64, f64)]) -> Vec<Reading> {
    raw.iter().map(|&(t, value)| Reading { t, value }).collect()
}

fn expected_line_plot() -> Canvas {
    let options = PlotOptions::default();
    let grid = options.grid.presentation.clone();
    let line = |x1, y1, x2, y2| -> Element {
        Line::new(x1, y1, x2, y2).with_presentation(grid.clone()).into()
    };

    let mut children: Vec<Element> = vec![
        Path::new(vec![
            PathCommand::move_to((0.0, 0.0)),
            PathCommand::line_to((100.0, 50.0)),
            PathCommand::line_to((200.0, 100.0)),
        ])
        .with_presentation(Arc::new(Presentation::new().stroke("red").stroke_width("0.8")))
        .into(),
    ];
    for y in [20.0, 40.0, 60.0, 80.0] {
        children.push(line(0.0, y, 200.0, y));
    }
    for x in [20.0, 40.0, 60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0] {
        children.push(line(x, 0.0, x, 100.0));
    }

    Canvas {
        width: 200.0,
        height: 100.0,
        children,
        presentation: Some(Arc::new(
            Presentation::new()
                .stroke("black")
                .fill("white")
                .stroke_width("0.7"),
        )),
    }
}

#[test]
fn line_plot_scales_points_and_adds_grid() {
    let points = readings(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let got = render_line(&points, 200.0, 100.0).expect("render");
    assert_eq!(got, expected_line_plot());
}

#[test]
fn line_plot_encodes_to_well_formed_svg() {
    let points = readings(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let svg = render_line(&points, 200.0, 100.0)
        .expect("render")
        .to_svg_string();

    assert!(svg.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="200.00" height="100.00" stroke="black" fill="white" stroke-width="0.7"><path d="M0.00 0.00 L100.00 50.00 L200.00 100.00 " stroke="red" stroke-width="0.8" />"#
    ));
    assert!(svg.ends_with(r#"<line x1="180.00" y1="0.00" x2="180.00" y2="100.00" opacity="0.1" /></svg>"#));

    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let root = doc.root_element();
    let children: Vec<_> = root.children().filter(|n| n.is_element()).collect();
    assert_eq!(children.len(), 1 + 4 + 9);
    assert_eq!(children[0].tag_name().name(), "path");
    assert!(
        children[1..]
            .iter()
            .all(|n| n.tag_name().name() == "line" && n.attribute("opacity") == Some("0.1"))
    );
}

#[test]
fn line_plot_accepts_tuples_and_arrays() {
    let tuples = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
    let arrays = [[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
    assert_eq!(
        render_line(&tuples, 200.0, 100.0).expect("tuples"),
        expected_line_plot()
    );
    assert_eq!(
        render_line(&arrays, 200.0, 100.0).expect("arrays"),
        expected_line_plot()
    );
}

#[test]
fn single_point_renders_centered_move_to() {
    let canvas = render_line(&[(5.0, 5.0)], 40.0, 40.0).expect("render");
    let Element::Path(path) = &canvas.children[0] else {
        panic!("expected the plotted path first");
    };
    assert_eq!(path.d, vec![PathCommand::move_to((20.0, 20.0))]);
    assert_eq!(canvas.children.len(), 3);
}

#[test]
fn custom_options_flow_through() {
    let options = PlotOptions {
        line: Arc::new(Presentation::new().stroke("blue").stroke_dash_array("4 2")),
        grid: GridStyle::default().with_stride(50.0),
        ..Default::default()
    };
    let canvas = render_line_with(&[(0.0, 0.0), (10.0, 10.0)], 100.0, 100.0, &options)
        .expect("render");
    let svg = canvas.to_svg_string();
    assert!(svg.contains(r#" stroke="blue" stroke-dasharray="4 2" />"#));
    assert_eq!(canvas.children.len(), 1 + 1 + 1);
    assert!(svg.contains(r#"<line x1="0.00" y1="50.00" x2="100.00" y2="50.00" opacity="0.1" />"#));
}

#[test]
fn sampled_series_still_spans_the_canvas() {
    let dense: Vec<Reading> = (0..=100)
        .map(|i| Reading {
            t: i as f64,
            value: (i % 7) as f64,
        })
        .collect();
    let sparse = sample(&dense, 10).expect("sample");
    assert_eq!(sparse.len(), 11);

    let canvas = render_line(&sparse, 100.0, 60.0).expect("render");
    let Element::Path(path) = &canvas.children[0] else {
        panic!("expected the plotted path first");
    };
    assert_eq!(path.d.len(), 11);
    let last = path.d.last().and_then(|c| c.point).expect("last point");
    assert_eq!(last.x, 100.0);
}
