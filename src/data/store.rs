use crate::error::Result;
use crate::types::Symbol;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a symbol file body: one symbol per line, blank lines dropped.
pub fn parse_symbols(text: &str) -> Vec<Symbol> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a symbol file. A file that does not exist yet is an empty list.
pub fn load_symbols<P: AsRef<Path>>(path: P) -> Result<Vec<Symbol>> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let symbols = parse_symbols(&text);
            log::debug!("Loaded {} symbols from {}", symbols.len(), path.display());
            Ok(symbols)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("{} not found, starting with an empty list", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Overwrite `path` with one symbol per line.
pub fn save_symbols<P: AsRef<Path>>(path: P, symbols: &[Symbol]) -> Result<()> {
    std::fs::write(path.as_ref(), symbols.join("\n"))?;
    log::debug!("Saved {} symbols to {}", symbols.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_blank_lines() {
        assert_eq!(parse_symbols("AAPL\n\nMSFT\n"), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_parse_trims_and_handles_crlf() {
        assert_eq!(
            parse_symbols("  2330.TW \r\n\r\n2317.TW\r\n   \n"),
            vec!["2330.TW", "2317.TW"]
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let symbols = load_symbols(dir.path().join("nope.txt")).unwrap();
        assert!(symbols.is_empty());
    }
}
