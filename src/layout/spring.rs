//! Fruchterman-Reingold spring layout.
//!
//! Nodes repel each other with force `k^2 / d` and edges pull their
//! endpoints together with force `d^2 / k`, where `k = sqrt(1 / n)` is the
//! ideal edge length in the unit square. Each iteration moves every node
//! along its net force by at most the current temperature, which cools
//! linearly to zero. The result is scaled uniformly into the configured box.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{Layout, LayoutConfig, Point};
use crate::graph::WiringGraph;

/// Lower bound on distances, keeps coincident nodes from blowing up.
const MIN_DISTANCE: f64 = 0.01;

/// Initial temperature as a fraction of the initial placement span.
const INITIAL_TEMPERATURE: f64 = 0.1;

/// Compute a spring layout of `graph`.
///
/// The result depends only on the graph (including its node order) and on
/// `config`; the same inputs always produce the same positions.
pub fn spring_layout(graph: &WiringGraph, config: &LayoutConfig) -> Layout {
    let nodes: Vec<char> = graph.nodes().collect();
    let centre = Point::new(config.width / 2.0, config.height / 2.0);

    match nodes.len() {
        0 => return Layout::from_positions(Vec::new(), config.width, config.height),
        1 => return Layout::from_positions(vec![(nodes[0], centre)], config.width, config.height),
        _ => {}
    }

    let index: HashMap<char, usize> = nodes.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .filter(|(a, b, _)| a != b)
        .map(|(a, b, _)| (index[&a], index[&b]))
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<Point> = nodes
        .iter()
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let k = (1.0 / nodes.len() as f64).sqrt();
    let (min, max) = bounds(&pos);
    let mut temperature = (max.x - min.x).max(max.y - min.y) * INITIAL_TEMPERATURE;
    let cooling = temperature / (config.iterations as f64 + 1.0);

    let mut disp = vec![Point::default(); pos.len()];
    for _ in 0..config.iterations {
        disp.iter_mut().for_each(|d| *d = Point::default());

        for i in 0..pos.len() {
            for j in (i + 1)..pos.len() {
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let d = dx.hypot(dy).max(MIN_DISTANCE);
                let f = k * k / d;
                disp[i].x += dx / d * f;
                disp[i].y += dy / d * f;
                disp[j].x -= dx / d * f;
                disp[j].y -= dy / d * f;
            }
        }

        for &(a, b) in &edges {
            let dx = pos[a].x - pos[b].x;
            let dy = pos[a].y - pos[b].y;
            let d = dx.hypot(dy).max(MIN_DISTANCE);
            let f = d * d / k;
            disp[a].x -= dx / d * f;
            disp[a].y -= dy / d * f;
            disp[b].x += dx / d * f;
            disp[b].y += dy / d * f;
        }

        for (p, d) in pos.iter_mut().zip(&disp) {
            let len = d.x.hypot(d.y);
            if len > 0.0 {
                let step = len.min(temperature);
                p.x += d.x / len * step;
                p.y += d.y / len * step;
            }
        }

        temperature -= cooling;
    }

    debug!(nodes = nodes.len(), edges = edges.len(), iterations = config.iterations, "spring layout done");

    let fitted = fit_to_box(&pos, config.width, config.height);
    Layout::from_positions(
        nodes.into_iter().zip(fitted).collect(),
        config.width,
        config.height,
    )
}

fn bounds(points: &[Point]) -> (Point, Point) {
    points.iter().fold(
        (
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        },
    )
}

/// Scale uniformly so the bounding box fills `width` x `height` along its
/// tighter axis, centred in the box.
fn fit_to_box(points: &[Point], width: f64, height: f64) -> Vec<Point> {
    let (min, max) = bounds(points);
    let span_x = max.x - min.x;
    let span_y = max.y - min.y;
    let scale_x = if span_x > 0.0 { width / span_x } else { f64::INFINITY };
    let scale_y = if span_y > 0.0 { height / span_y } else { f64::INFINITY };
    let scale = scale_x.min(scale_y);

    let centre = Point::new(width / 2.0, height / 2.0);
    if !scale.is_finite() {
        return vec![centre; points.len()];
    }

    let mid = min.midpoint(max);
    points
        .iter()
        .map(|p| Point::new(centre.x + (p.x - mid.x) * scale, centre.y + (p.y - mid.y) * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu;
    use approx::assert_relative_eq;

    fn graph(text: &str) -> WiringGraph {
        WiringGraph::from_menu(&menu::parse(text).unwrap())
    }

    #[test]
    fn test_empty_graph() {
        let layout = spring_layout(&WiringGraph::new(), &LayoutConfig::default());
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_node_is_centred() {
        // A self loop is the only way to get a lone node from a menu
        let layout = spring_layout(&graph("ZZKAA"), &LayoutConfig::new().with_size(200.0, 100.0));
        let p = layout.position('A').unwrap();
        assert_relative_eq!(p.x, 100.0);
        assert_relative_eq!(p.y, 50.0);
    }

    #[test]
    fn test_positions_fill_box() {
        let config = LayoutConfig::new().with_size(400.0, 300.0).with_seed(7);
        let layout = spring_layout(&graph("1AB\n2BC\n3CD\n4DA\n5AC\n"), &config);
        assert_eq!(layout.len(), 4);

        let points: Vec<Point> = layout.iter().map(|(_, p)| p).collect();
        for p in &points {
            assert!(p.x >= -1e-9 && p.x <= 400.0 + 1e-9, "x out of box: {p:?}");
            assert!(p.y >= -1e-9 && p.y <= 300.0 + 1e-9, "y out of box: {p:?}");
        }

        let (min, max) = bounds(&points);
        let fills_width = (max.x - min.x - 400.0).abs() < 1e-6;
        let fills_height = (max.y - min.y - 300.0).abs() < 1e-6;
        assert!(fills_width || fills_height);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let g = graph("ZZKAE\nZZLEQ\nZZMQA\nZZNQT\n");
        let config = LayoutConfig::new().with_seed(3);
        let first = spring_layout(&g, &config);
        let second = spring_layout(&g, &config);
        for (c, p) in first.iter() {
            assert_eq!(second.position(c), Some(p));
        }
    }

    #[test]
    fn test_nodes_do_not_collapse() {
        let layout = spring_layout(&graph("1AB\n2BC\n"), &LayoutConfig::default());
        let a = layout.position('A').unwrap();
        let b = layout.position('B').unwrap();
        let c = layout.position('C').unwrap();
        assert!(a.distance(b) > 1e-3);
        assert!(b.distance(c) > 1e-3);
        assert!(a.distance(c) > 1e-3);
    }

    #[test]
    fn test_zero_iterations_keeps_initial_spread() {
        let layout = spring_layout(&graph("1AB\n"), &LayoutConfig::new().with_iterations(0));
        assert_eq!(layout.len(), 2);
        assert!(layout.position('A').unwrap().distance(layout.position('B').unwrap()) > 0.5);
    }
}
