//! Node placement for the wiring graph.
//!
//! The only layout is a force-directed spring layout
//! ([`spring_layout`]). Positions live in the `width` x `height` box of the
//! [`LayoutConfig`] with the origin at the top-left corner. A [`Layout`]
//! remembers that box, and the renderer scales it onto its plot area, so
//! any box size renders the same picture.

mod spring;

pub use spring::spring_layout;

use std::collections::HashMap;

/// Default number of spring layout iterations.
pub const DEFAULT_ITERATIONS: usize = 50;

/// A 2-D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Configuration for the spring layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Number of force iterations.
    pub iterations: usize,
    /// Seed for the initial placement.
    pub seed: u64,
    /// Width of the target box.
    pub width: f64,
    /// Height of the target box.
    pub height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: 0,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of force iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the seed of the initial placement.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the size of the target box.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Computed node positions inside a `width` x `height` box.
#[derive(Debug, Clone)]
pub struct Layout {
    positions: Vec<(char, Point)>,
    index: HashMap<char, usize>,
    width: f64,
    height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::from_positions(Vec::new(), 1.0, 1.0)
    }
}

impl Layout {
    pub(crate) fn from_positions(positions: Vec<(char, Point)>, width: f64, height: f64) -> Self {
        let index = positions
            .iter()
            .enumerate()
            .map(|(i, (c, _))| (*c, i))
            .collect();
        Self {
            positions,
            index,
            width,
            height,
        }
    }

    /// Width and height of the box the positions live in.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Position of node `c` as fractions of the box, each in `[0, 1]`.
    pub fn relative_position(&self, c: char) -> Option<Point> {
        let p = self.position(c)?;
        let fraction = |v: f64, extent: f64| if extent > 0.0 { v / extent } else { 0.5 };
        Some(Point::new(fraction(p.x, self.width), fraction(p.y, self.height)))
    }

    /// Position of node `c`.
    pub fn position(&self, c: char) -> Option<Point> {
        self.index.get(&c).map(|&i| self.positions[i].1)
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no node was placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Nodes and their positions, in graph node order.
    pub fn iter(&self) -> impl Iterator<Item = (char, Point)> + '_ {
        self.positions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_helpers() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
    }

    #[test]
    fn test_layout_lookup() {
        let layout = Layout::from_positions(
            vec![('A', Point::new(50.0, 25.0)), ('B', Point::new(100.0, 0.0))],
            100.0,
            50.0,
        );
        assert_eq!(layout.position('A'), Some(Point::new(50.0, 25.0)));
        assert_eq!(layout.relative_position('A'), Some(Point::new(0.5, 0.5)));
        assert_eq!(layout.relative_position('B'), Some(Point::new(1.0, 0.0)));
        assert_eq!(layout.position('C'), None);
        assert_eq!(layout.size(), (100.0, 50.0));
        assert_eq!(layout.iter().map(|(c, _)| c).collect::<String>(), "AB");
    }

    #[test]
    fn test_config_builder() {
        let config = LayoutConfig::new()
            .with_iterations(10)
            .with_seed(42)
            .with_size(800.0, 600.0);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.seed, 42);
        assert_relative_eq!(config.width, 800.0);
        assert_relative_eq!(config.height, 600.0);
    }
}
