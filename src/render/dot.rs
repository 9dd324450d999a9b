//! Graphviz DOT export.

use std::fmt::{self, Write as _};

use crate::graph::WiringGraph;

/// Render `graph` as an undirected DOT graph named `title`.
///
/// Nodes are listed first so isolated letters keep their declaration
/// order; every edge carries its label.
pub fn to_dot(graph: &WiringGraph, title: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_dot(&mut out, graph, title);
    out
}

fn write_dot(out: &mut String, graph: &WiringGraph, title: &str) -> fmt::Result {
    writeln!(out, "graph {} {{", Quoted(title))?;
    writeln!(out, "    label={};", Quoted(title))?;
    writeln!(out, "    labelloc=t;")?;
    writeln!(out, "    node [shape=circle, style=filled, fillcolor=\"#1f78b4\", fontname=\"Helvetica-Bold\"];")?;
    for node in graph.nodes() {
        let mut buf = [0u8; 4];
        writeln!(out, "    {};", Quoted(node.encode_utf8(&mut buf)))?;
    }
    for (a, b, label) in graph.edges() {
        let (mut buf_a, mut buf_b) = ([0u8; 4], [0u8; 4]);
        writeln!(
            out,
            "    {} -- {} [label={}];",
            Quoted(a.encode_utf8(&mut buf_a)),
            Quoted(b.encode_utf8(&mut buf_b)),
            Quoted(label)
        )?;
    }
    writeln!(out, "}}")
}

/// DOT double-quoted string.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu;

    #[test]
    fn test_dot_output() {
        let graph = WiringGraph::from_menu(&menu::parse("ZZKAE\nZZLEQ\n").unwrap());
        let dot = to_dot(&graph, "menu.txt");
        assert!(dot.starts_with("graph \"menu.txt\" {\n"));
        assert!(dot.contains("    \"A\" -- \"E\" [label=\"ZZK\"];\n"));
        assert!(dot.contains("    \"E\" -- \"Q\" [label=\"ZZL\"];\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_quoting() {
        assert_eq!(Quoted(r#"a"b\c"#).to_string(), r#""a\"b\\c""#);
    }
}
