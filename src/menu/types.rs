//! Parsed menu types.

use std::fmt;

/// A register declaration: two linked positions named by letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterPair {
    /// Character at index 1 of the `=` line
    pub first: char,
    /// Character at index 3 of the `=` line
    pub second: char,
}

impl RegisterPair {
    /// Create a new register pair.
    pub fn new(first: char, second: char) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for RegisterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}')", self.first, self.second)
    }
}

/// An edge declaration: a connection between two letters, labelled with the
/// rest of the line (the scrambler positions in bombe menus).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    /// Second to last character of the line
    pub from: char,
    /// Last character of the line
    pub to: char,
    /// Everything before the two endpoint characters
    pub label: String,
    /// Source line number (1-indexed)
    pub line: usize,
}

/// Classification of a single uppercased menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `+` line: end of the menu body
    Sentinel,
    /// `=` line
    Register(RegisterPair),
    /// Any other line
    Edge(EdgeDecl),
}

/// A menu as read from its text form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    /// Register declarations in file order
    pub registers: Vec<RegisterPair>,
    /// Edge declarations in file order, duplicates included
    pub edges: Vec<EdgeDecl>,
    /// Line number of the `+` sentinel, if the scan stopped at one
    pub sentinel_line: Option<usize>,
}

impl Menu {
    /// Create a new empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu declares neither registers nor edges.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty() && self.edges.is_empty()
    }

    /// Display adapter printing the registers as `[('A', 'B'), ...]`.
    pub fn register_list(&self) -> RegisterList<'_> {
        RegisterList(&self.registers)
    }
}

/// Formats a register slice as a bracketed list.
pub struct RegisterList<'a>(pub &'a [RegisterPair]);

impl fmt::Display for RegisterList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pair) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_list_format() {
        let menu = Menu {
            registers: vec![RegisterPair::new('A', 'B'), RegisterPair::new('E', 'Q')],
            ..Menu::default()
        };
        assert_eq!(menu.register_list().to_string(), "[('A', 'B'), ('E', 'Q')]");
    }

    #[test]
    fn test_empty_register_list() {
        assert_eq!(Menu::new().register_list().to_string(), "[]");
        assert!(Menu::new().is_empty());
    }
}
