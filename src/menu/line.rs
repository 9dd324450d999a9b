//! Line classification for menu text.

use super::types::{EdgeDecl, LineKind, RegisterPair};
use crate::error::{LineClass, MenuError, Result};

/// First character of the end-of-menu sentinel line.
pub const SENTINEL_PREFIX: char = '+';

/// First character of a register line.
pub const REGISTER_PREFIX: char = '=';

/// Minimum length of a register line (`=A:B`).
pub const MIN_REGISTER_LEN: usize = 4;

/// Minimum length of an edge line (two endpoint letters, empty label).
pub const MIN_EDGE_LEN: usize = 2;

/// Classify one uppercased menu line.
///
/// The first character alone decides the class. Positions are counted in
/// characters, so non-ASCII letters are taken whole.
///
/// # Errors
/// [`MenuError::ShortLine`] if a register line has fewer than
/// [`MIN_REGISTER_LEN`] characters or an edge line fewer than
/// [`MIN_EDGE_LEN`].
pub fn classify(line_no: usize, line: &str) -> Result<LineKind> {
    match line.chars().next() {
        Some(SENTINEL_PREFIX) => Ok(LineKind::Sentinel),
        Some(REGISTER_PREFIX) => classify_register(line_no, line),
        _ => classify_edge(line_no, line),
    }
}

fn classify_register(line_no: usize, line: &str) -> Result<LineKind> {
    let head: Vec<char> = line.chars().take(MIN_REGISTER_LEN).collect();
    if head.len() < MIN_REGISTER_LEN {
        return Err(MenuError::short_line(
            line_no,
            LineClass::Register,
            head.len(),
            MIN_REGISTER_LEN,
        ));
    }
    Ok(LineKind::Register(RegisterPair::new(head[1], head[3])))
}

fn classify_edge(line_no: usize, line: &str) -> Result<LineKind> {
    let mut chars = line.chars();
    let (to, from) = match (chars.next_back(), chars.next_back()) {
        (Some(to), Some(from)) => (to, from),
        _ => {
            return Err(MenuError::short_line(
                line_no,
                LineClass::Edge,
                line.chars().count(),
                MIN_EDGE_LEN,
            ))
        }
    };

    Ok(LineKind::Edge(EdgeDecl {
        from,
        to,
        label: chars.as_str().to_string(),
        line: line_no,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert_eq!(classify(1, "+").unwrap(), LineKind::Sentinel);
        assert_eq!(classify(1, "+ANYTHING").unwrap(), LineKind::Sentinel);
    }

    #[test]
    fn test_register() {
        assert_eq!(
            classify(1, "=E:Q").unwrap(),
            LineKind::Register(RegisterPair::new('E', 'Q'))
        );
        // Only indices 1 and 3 matter
        assert_eq!(
            classify(1, "=ABCDEF").unwrap(),
            LineKind::Register(RegisterPair::new('A', 'C'))
        );
    }

    #[test]
    fn test_short_register() {
        let err = classify(7, "=AB").unwrap_err();
        match err {
            MenuError::ShortLine {
                line,
                class,
                length,
                required,
            } => {
                assert_eq!(line, 7);
                assert_eq!(class, LineClass::Register);
                assert_eq!(length, 3);
                assert_eq!(required, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_edge() {
        let kind = classify(2, "ZZKAE").unwrap();
        assert_eq!(
            kind,
            LineKind::Edge(EdgeDecl {
                from: 'A',
                to: 'E',
                label: "ZZK".to_string(),
                line: 2,
            })
        );
    }

    #[test]
    fn test_edge_without_label() {
        match classify(1, "XY").unwrap() {
            LineKind::Edge(edge) => {
                assert_eq!((edge.from, edge.to), ('X', 'Y'));
                assert!(edge.label.is_empty());
            }
            other => panic!("expected edge, got {other:?}"),
        }
    }

    #[test]
    fn test_short_edge() {
        assert!(matches!(
            classify(4, "X"),
            Err(MenuError::ShortLine {
                line: 4,
                class: LineClass::Edge,
                length: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_non_ascii_edge() {
        match classify(1, "ÄBÖÜ").unwrap() {
            LineKind::Edge(edge) => {
                assert_eq!((edge.from, edge.to), ('Ö', 'Ü'));
                assert_eq!(edge.label, "ÄB");
            }
            other => panic!("expected edge, got {other:?}"),
        }
    }
}
