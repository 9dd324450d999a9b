//! # Bombe Menu
//!
//! Reader and plotter for Turing bombe menus.
//!
//! A menu describes how the scramblers of a bombe are wired together: each
//! edge line connects two letters and is labelled with a scrambler
//! position, each register line names a pair of linked letters. This
//! library provides:
//! - A parser for the line-oriented menu format
//! - The wiring graph built from the parsed edges
//! - A force-directed layout of that graph
//! - SVG and Graphviz DOT rendering
//!
//! ## Architecture
//!
//! - [`menu`] - Line classification and menu parsing
//! - [`graph`] - Wiring graph with one label per letter pair
//! - [`layout`] - Spring layout of the wiring graph
//! - [`render`] - Rendering context and output formats
//! - [`output`] - Output files and viewer launch (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! bombe-menu data/menu.txt --open
//! ```
//!
//! ### Library
//!
//! ```
//! use bombe_menu::{menu, render::Figure, spring_layout, LayoutConfig, WiringGraph};
//!
//! let menu = menu::parse("ZZKAE\nZZLEQ\nZZMQA\n=E:Q\n+\n").unwrap();
//! let graph = WiringGraph::from_menu(&menu);
//! let layout = spring_layout(&graph, &LayoutConfig::default());
//!
//! let mut figure = Figure::new("example");
//! figure.draw(&graph, &layout);
//! figure.draw_edge_labels(&graph, &layout);
//! assert!(figure.to_svg().contains("ZZK"));
//! ```

pub mod error;
pub mod graph;
pub mod layout;
pub mod menu;
pub mod render;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use error::{MenuError, Result};
pub use graph::WiringGraph;
pub use layout::{spring_layout, Layout, LayoutConfig};
pub use menu::Menu;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{render_menu_svg, WasmMenuPlot};

/// Menu file used when none is given on the command line.
pub const DEFAULT_MENU_PATH: &str = "../data/m4_project_break2_menu.txt";
