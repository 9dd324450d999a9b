//! Parser for menu text.

use std::io::Write;

use tracing::{debug, info};

use super::line::classify;
use super::types::{LineKind, Menu};
use crate::error::{MenuError, Result};

/// Line-by-line menu parser.
///
/// Every uppercased line is echoed to the trace sink before it is
/// classified, so a failing line is the last one in the trace.
pub struct Parser<W: Write> {
    trace: W,
    menu: Menu,
}

impl<W: Write> Parser<W> {
    /// Create a new parser that echoes lines to `trace`.
    pub fn new(trace: W) -> Self {
        Self {
            trace,
            menu: Menu::new(),
        }
    }

    /// Parse the entire menu text.
    pub fn parse(mut self, input: &str) -> Result<Menu> {
        for (idx, raw) in split_lines(input).enumerate() {
            let line_no = idx + 1;
            let line = raw.to_uppercase();
            writeln!(self.trace, "{line}").map_err(MenuError::Trace)?;

            if line.trim().is_empty() {
                continue;
            }

            match classify(line_no, &line)? {
                LineKind::Sentinel => {
                    debug!(line = line_no, "sentinel, stopping scan");
                    self.menu.sentinel_line = Some(line_no);
                    break;
                }
                LineKind::Register(pair) => {
                    debug!(line = line_no, %pair, "register");
                    self.menu.registers.push(pair);
                }
                LineKind::Edge(edge) => {
                    debug!(line = line_no, from = %edge.from, to = %edge.to, label = %edge.label, "edge");
                    self.menu.edges.push(edge);
                }
            }
        }

        self.trace.flush().map_err(MenuError::Trace)?;

        info!(
            registers = self.menu.registers.len(),
            edges = self.menu.edges.len(),
            "parsed menu"
        );
        Ok(self.menu)
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, without a trailing empty line.
fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}
