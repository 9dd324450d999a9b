//! Wiring graph built from a parsed menu.
//!
//! Nodes are the letters named by edge declarations. Each unordered pair of
//! letters carries at most one edge, and that edge holds the label of the
//! last declaration naming the pair.

use petgraph::graphmap::UnGraphMap;
use tracing::warn;

use crate::menu::Menu;

/// Undirected letter graph with one label per edge.
#[derive(Debug, Clone, Default)]
pub struct WiringGraph {
    graph: UnGraphMap<char, String>,
}

impl WiringGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from every edge declaration of a menu, in file order.
    pub fn from_menu(menu: &Menu) -> Self {
        let mut graph = Self::new();
        for edge in &menu.edges {
            if let Some(previous) = graph.add_edge(edge.from, edge.to, edge.label.clone()) {
                warn!(
                    line = edge.line,
                    from = %edge.from,
                    to = %edge.to,
                    previous = %previous,
                    label = %edge.label,
                    "edge declared again, replacing label"
                );
            }
        }
        graph
    }

    /// Insert an edge between `a` and `b`, adding the nodes if needed.
    ///
    /// Returns the label previously stored for the pair, in either
    /// orientation.
    pub fn add_edge(&mut self, a: char, b: char, label: String) -> Option<String> {
        self.graph.add_edge(a, b, label)
    }

    /// Number of distinct letters.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct letter pairs.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Letters in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = char> + '_ {
        self.graph.nodes()
    }

    /// Edges as `(a, b, label)` in first-insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (char, char, &str)> + '_ {
        self.graph
            .all_edges()
            .map(|(a, b, label)| (a, b, label.as_str()))
    }

    /// Label of the edge between `a` and `b`, in either orientation.
    pub fn label(&self, a: char, b: char) -> Option<&str> {
        self.graph.edge_weight(a, b).map(String::as_str)
    }

    /// Whether `c` appears in the graph.
    pub fn contains_node(&self, c: char) -> bool {
        self.graph.contains_node(c)
    }

    /// Letters connected to `c`.
    pub fn neighbors(&self, c: char) -> impl Iterator<Item = char> + '_ {
        self.graph.neighbors(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu;

    #[test]
    fn test_from_menu() {
        let menu = menu::parse("ZZKAE\nZZLEQ\nZZMQA\n").unwrap();
        let graph = WiringGraph::from_menu(&menu);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!['A', 'E', 'Q']);
        assert_eq!(graph.label('E', 'A'), Some("ZZK"));
    }

    #[test]
    fn test_last_label_wins() {
        let menu = menu::parse("AXY\nBXY\n").unwrap();
        let graph = WiringGraph::from_menu(&menu);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.label('X', 'Y'), Some("B"));
    }

    #[test]
    fn test_reversed_pair_replaces_label() {
        let mut graph = WiringGraph::new();
        assert_eq!(graph.add_edge('X', 'Y', "A".to_string()), None);
        assert_eq!(graph.add_edge('Y', 'X', "B".to_string()), Some("A".to_string()));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.label('X', 'Y'), Some("B"));
    }

    #[test]
    fn test_neighbors() {
        let menu = menu::parse("1AB\n2AC\n3CD\n").unwrap();
        let graph = WiringGraph::from_menu(&menu);
        let mut around_a: Vec<char> = graph.neighbors('A').collect();
        around_a.sort_unstable();
        assert_eq!(around_a, vec!['B', 'C']);
        assert!(graph.contains_node('D'));
        assert!(!graph.contains_node('Z'));
    }

    #[test]
    fn test_empty_menu() {
        let graph = WiringGraph::from_menu(&menu::parse("").unwrap());
        assert!(graph.is_empty());
        assert_eq!(graph.edges().count(), 0);
    }
}
