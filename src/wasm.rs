//! WASM bindings for Bombe Menu.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmMenuPlot } from 'bombe_menu';
//!
//! await init();
//!
//! const plot = new WasmMenuPlot(`ZZKAE
//! ZZLEQ
//! ZZMQA
//! =E:Q
//! +`);
//!
//! document.getElementById('menu').innerHTML = plot.svg('my menu', 0);
//! console.log(plot.registers());
//! ```

use wasm_bindgen::prelude::*;

use crate::graph::WiringGraph;
use crate::layout::{spring_layout, LayoutConfig};
use crate::menu::{self, Menu};
use crate::render::{to_dot, Figure};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A parsed menu ready to be rendered from JavaScript.
#[wasm_bindgen]
pub struct WasmMenuPlot {
    menu: Menu,
    graph: WiringGraph,
}

#[wasm_bindgen]
impl WasmMenuPlot {
    /// Parse menu text.
    ///
    /// # Returns
    /// A new `WasmMenuPlot` or the parse error message.
    #[wasm_bindgen(constructor)]
    pub fn new(menu_text: &str) -> Result<WasmMenuPlot, JsValue> {
        let menu = menu::parse(menu_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let graph = WiringGraph::from_menu(&menu);
        Ok(WasmMenuPlot { menu, graph })
    }

    /// Render the menu as an SVG document.
    ///
    /// # Arguments
    /// * `title` - Text drawn above the graph
    /// * `seed` - Seed of the spring layout
    #[wasm_bindgen]
    pub fn svg(&self, title: &str, seed: u32) -> String {
        render_graph_svg(&self.graph, title, u64::from(seed))
    }

    /// Render the menu as Graphviz DOT.
    #[wasm_bindgen]
    pub fn dot(&self, title: &str) -> String {
        to_dot(&self.graph, title)
    }

    /// Registers formatted as `[('A', 'B'), ...]`.
    #[wasm_bindgen]
    pub fn registers(&self) -> String {
        self.menu.register_list().to_string()
    }

    /// Number of distinct letters in the wiring graph.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct letter pairs in the wiring graph.
    #[wasm_bindgen(getter)]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Parse `menu_text` and render it as SVG in one call.
#[wasm_bindgen]
pub fn render_menu_svg(menu_text: &str, title: &str) -> Result<String, JsValue> {
    let plot = WasmMenuPlot::new(menu_text)?;
    Ok(plot.svg(title, 0))
}

fn render_graph_svg(graph: &WiringGraph, title: &str, seed: u64) -> String {
    let layout = spring_layout(graph, &LayoutConfig::new().with_seed(seed));
    let mut figure = Figure::new(title);
    figure.draw(graph, &layout);
    figure.draw_edge_labels(graph, &layout);
    figure.to_svg()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
