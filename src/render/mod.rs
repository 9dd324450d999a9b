//! Drawing of the wiring graph.
//!
//! A [`Figure`] is an explicit rendering context: it is created with a
//! title, graph elements are drawn into it, and [`Figure::show`] writes the
//! finished picture as an SVG document. [`to_dot`] exports the same graph as
//! Graphviz DOT for external layout tools.

mod dot;
mod svg;

pub use dot::to_dot;

use std::io::{self, Write};

use crate::graph::WiringGraph;
use crate::layout::{Layout, Point};

/// Default figure width in pixels.
pub const DEFAULT_WIDTH: f64 = 640.0;

/// Default figure height in pixels.
pub const DEFAULT_HEIGHT: f64 = 480.0;

/// Visual parameters of a figure.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Radius of node circles
    pub node_radius: f64,
    /// Font size of node and edge labels
    pub font_size: f64,
    /// Font size of the title
    pub title_font_size: f64,
    /// Blank space around the plot area
    pub margin: f64,
    /// Node fill colour
    pub node_color: String,
    /// Edge stroke colour
    pub edge_color: String,
    /// Background colour
    pub background: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_radius: 14.0,
            font_size: 12.0,
            title_font_size: 16.0,
            margin: 36.0,
            node_color: "#1f78b4".to_string(),
            edge_color: "black".to_string(),
            background: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
enum Element {
    Edge { from: Point, to: Point },
    Loop { at: Point },
    Node { at: Point, name: char },
    EdgeLabel { at: Point, text: String },
}

/// Rendering context for one menu plot.
#[derive(Debug, Clone)]
pub struct Figure {
    title: String,
    width: f64,
    height: f64,
    style: RenderStyle,
    elements: Vec<Element>,
}

impl Figure {
    /// Create an empty figure with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            style: RenderStyle::default(),
            elements: Vec::new(),
        }
    }

    /// Set the figure size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Title drawn above the plot.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Figure width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Figure height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of drawn edges, self loops included.
    pub fn edge_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Edge { .. } | Element::Loop { .. }))
            .count()
    }

    /// Number of drawn nodes.
    pub fn node_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Node { .. }))
            .count()
    }

    /// Draw every edge and every node of `graph`.
    ///
    /// The layout's box, whatever its size, is scaled onto the plot area
    /// below the title. Nodes missing from the layout are not drawn, nor are
    /// their edges.
    pub fn draw(&mut self, graph: &WiringGraph, layout: &Layout) {
        for (a, b, _) in graph.edges() {
            let (Some(from), Some(to)) = (self.place(layout, a), self.place(layout, b)) else {
                continue;
            };
            if a == b {
                self.elements.push(Element::Loop { at: from });
            } else {
                self.elements.push(Element::Edge { from, to });
            }
        }

        for name in graph.nodes() {
            if let Some(at) = self.place(layout, name) {
                self.elements.push(Element::Node { at, name });
            }
        }
    }

    /// Draw the label of every edge at its midpoint.
    pub fn draw_edge_labels(&mut self, graph: &WiringGraph, layout: &Layout) {
        for (a, b, label) in graph.edges() {
            let (Some(from), Some(to)) = (self.place(layout, a), self.place(layout, b)) else {
                continue;
            };
            let at = if a == b {
                Point::new(from.x, from.y - self.style.node_radius * 2.5)
            } else {
                from.midpoint(to)
            };
            self.elements.push(Element::EdgeLabel {
                at,
                text: label.to_string(),
            });
        }
    }

    /// Render the figure as an SVG document.
    pub fn to_svg(&self) -> String {
        svg::Svg(self).to_string()
    }

    /// Write the SVG document to `sink`.
    pub fn show<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", svg::Svg(self))?;
        sink.flush()
    }

    /// Top-left corner and size of the area nodes are placed in.
    fn plot_area(&self) -> (Point, f64, f64) {
        let top = self.style.margin + self.style.title_font_size;
        let origin = Point::new(self.style.margin, top);
        let w = (self.width - 2.0 * self.style.margin).max(0.0);
        let h = (self.height - top - self.style.margin).max(0.0);
        (origin, w, h)
    }

    fn place(&self, layout: &Layout, c: char) -> Option<Point> {
        let (origin, w, h) = self.plot_area();
        layout
            .relative_position(c)
            .map(|p| Point::new(origin.x + p.x * w, origin.y + p.y * h))
    }
}
