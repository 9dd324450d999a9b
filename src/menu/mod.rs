//! Reader for bombe menu files.
//!
//! A menu is a line-oriented, case-insensitive text file. Each line is
//! uppercased and classified by its first character.
//!
//! # Format
//!
//! | First char | Meaning | Fields |
//! |------------|---------|--------|
//! | `+` | End of menu, later lines are ignored | none |
//! | `=` | Register declaration | characters at index 1 and 3 |
//! | other | Edge declaration | label = all but the last two characters, endpoints = last two characters |
//!
//! Lines end with `\n`, `\r\n` or a lone `\r`. Blank lines are skipped.
//!
//! # Example
//!
//! ```text
//! ZZKAE
//! ZZLEQ
//! ZZMQA
//! =E:Q
//! +
//! ```
//!
//! Three edges (`A-E` labelled `ZZK`, `E-Q` labelled `ZZL`, `Q-A` labelled
//! `ZZM`) and one register `('E', 'Q')`.

mod line;
mod parser;
mod types;

pub use line::{classify, MIN_EDGE_LEN, MIN_REGISTER_LEN, REGISTER_PREFIX, SENTINEL_PREFIX};
pub use parser::Parser;
pub use types::*;

use std::io::Write;
use std::path::Path;

use crate::error::{MenuError, Result};

/// Parse menu text into a [`Menu`].
pub fn parse(input: &str) -> Result<Menu> {
    Parser::new(std::io::sink()).parse(input)
}

/// Parse menu text, echoing every uppercased line to `trace`.
pub fn parse_with_trace<W: Write>(input: &str, trace: W) -> Result<Menu> {
    Parser::new(trace).parse(input)
}

/// Parse a menu file.
pub fn parse_file(path: &Path) -> Result<Menu> {
    parse_file_with_trace(path, std::io::sink())
}

/// Parse a menu file, echoing every uppercased line to `trace`.
pub fn parse_file_with_trace<W: Write>(path: &Path, trace: W) -> Result<Menu> {
    let content = std::fs::read_to_string(path).map_err(|e| MenuError::file_read(path, e))?;
    parse_with_trace(&content, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example_menu() {
        let menu = parse("zzkae\nzzleq\nzzmqa\n=e:q\n+\n").unwrap();
        assert_eq!(menu.edges.len(), 3);
        assert_eq!(menu.edges[0].label, "ZZK");
        assert_eq!(menu.registers, vec![RegisterPair::new('E', 'Q')]);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_file(Path::new("/nonexistent/menu.txt")).unwrap_err();
        assert!(matches!(err, MenuError::FileRead { .. }));
    }
}
