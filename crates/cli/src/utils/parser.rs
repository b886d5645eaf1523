use anyhow::{Context, Result, bail};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use scope_resolver_core::Position;

static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<path>.+?)(?::(?P<line>\d+))?(?::(?P<column>\d+))?$")
        .expect("location pattern is valid")
});

/// `path[:line[:column]]` with 1-based line and column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Location {
    /// 0-based position; missing parts point at the start of the line or file
    pub fn position(&self) -> Position {
        Position::new(
            self.line.unwrap_or(1).saturating_sub(1),
            self.column.unwrap_or(1).saturating_sub(1),
        )
    }
}

pub fn parse_location(arg: &str) -> Result<Location> {
    let captures = LOCATION
        .captures(arg)
        .with_context(|| format!("Invalid location: {arg}"))?;
    let number = |name: &str| -> Result<Option<u32>> {
        captures
            .name(name)
            .map(|m| {
                m.as_str()
                    .parse::<u32>()
                    .with_context(|| format!("Invalid {name} in {arg}"))
            })
            .transpose()
    };
    let line = number("line")?;
    let column = number("column")?;
    if line == Some(0) || column == Some(0) {
        bail!("Line and column are 1-based: {arg}");
    }

    Ok(Location {
        path: PathBuf::from(&captures["path"]),
        line,
        column,
    })
}

/// Literal JSON, or the contents of a file when prefixed with `@`
pub fn read_json_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        None => Ok(arg.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location_variants() {
        let full = parse_location("src/app.ts:3:14").unwrap();
        assert_eq!(full.path, PathBuf::from("src/app.ts"));
        assert_eq!(full.position(), Position::new(2, 13));

        let line_only = parse_location("data.json:2").unwrap();
        assert_eq!(line_only.column, None);
        assert_eq!(line_only.position(), Position::new(1, 0));

        let bare = parse_location("lib.rs").unwrap();
        assert_eq!(bare.line, None);
        assert_eq!(bare.position(), Position::new(0, 0));
    }

    #[test]
    fn test_parse_location_keeps_drive_letters() {
        let location = parse_location(r"C:\work\main.rs:10").unwrap();
        assert_eq!(location.path, PathBuf::from(r"C:\work\main.rs"));
        assert_eq!(location.line, Some(10));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(parse_location("a.ts:0").is_err());
        assert!(parse_location("a.ts:1:0").is_err());
    }

    #[test]
    fn test_read_json_arg() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("targets.json");
        std::fs::write(&path, "[]").unwrap();

        assert_eq!(read_json_arg("{}").unwrap(), "{}");
        assert_eq!(read_json_arg(&format!("@{}", path.display())).unwrap(), "[]");
        assert!(read_json_arg("@/definitely/missing.json").is_err());
    }
}
