use super::store::{load_symbols, save_symbols};
use crate::error::Result;
use crate::types::Symbol;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Watch,
    Focus,
}

/// The regular watchlist and the focus list, each bound to its file.
///
/// A symbol is in at most one of the two lists, and never twice in the same
/// list.
#[derive(Debug, Clone)]
pub struct Watchlists {
    watchlist: Vec<Symbol>,
    focus_list: Vec<Symbol>,
    watch_path: PathBuf,
    focus_path: PathBuf,
}

impl Watchlists {
    /// Load both lists. Duplicates keep their first occurrence; a symbol
    /// found in both files stays in the focus list only.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(watch_path: P, focus_path: Q) -> Result<Self> {
        let focus_list = dedup(load_symbols(&focus_path)?);
        let in_focus: HashSet<&Symbol> = focus_list.iter().collect();

        let watchlist: Vec<Symbol> = dedup(load_symbols(&watch_path)?)
            .into_iter()
            .filter(|s| {
                let keep = !in_focus.contains(s);
                if !keep {
                    log::warn!("{} is listed in both files, keeping it in the focus list", s);
                }
                keep
            })
            .collect();

        Ok(Self {
            watchlist,
            focus_list,
            watch_path: watch_path.as_ref().to_path_buf(),
            focus_path: focus_path.as_ref().to_path_buf(),
        })
    }

    pub fn watchlist(&self) -> &[Symbol] {
        &self.watchlist
    }

    pub fn focus_list(&self) -> &[Symbol] {
        &self.focus_list
    }

    pub fn contains(&self, symbol: &str) -> Option<ListKind> {
        if self.focus_list.iter().any(|s| s == symbol) {
            Some(ListKind::Focus)
        } else if self.watchlist.iter().any(|s| s == symbol) {
            Some(ListKind::Watch)
        } else {
            None
        }
    }

    /// Every symbol to fetch: watchlist first, then the focus list.
    pub fn all_symbols(&self) -> Vec<Symbol> {
        self.watchlist
            .iter()
            .chain(self.focus_list.iter())
            .cloned()
            .collect()
    }

    /// Append a new symbol to the watchlist and persist it.
    ///
    /// Returns `Ok(false)` without touching any file when the symbol is
    /// blank or already in either list.
    pub fn add(&mut self, symbol: &str) -> Result<bool> {
        let symbol = symbol.trim();
        if symbol.is_empty() || self.contains(symbol).is_some() {
            return Ok(false);
        }

        self.watchlist.push(symbol.to_string());
        log::info!("Added {} to the watchlist", symbol);
        save_symbols(&self.watch_path, &self.watchlist)?;
        Ok(true)
    }

    /// Move `symbol` to the other list and persist both files.
    ///
    /// Returns the list the symbol now lives in, or `None` when it is in
    /// neither list.
    pub fn toggle(&mut self, symbol: &str) -> Result<Option<ListKind>> {
        let destination = match self.contains(symbol) {
            Some(ListKind::Focus) => {
                self.focus_list.retain(|s| s != symbol);
                self.watchlist.push(symbol.to_string());
                ListKind::Watch
            }
            Some(ListKind::Watch) => {
                self.watchlist.retain(|s| s != symbol);
                self.focus_list.push(symbol.to_string());
                ListKind::Focus
            }
            None => return Ok(None),
        };

        log::info!("Moved {} to the {:?} list", symbol, destination);
        self.save()?;
        Ok(Some(destination))
    }

    pub fn save(&self) -> Result<()> {
        save_symbols(&self.watch_path, &self.watchlist)?;
        save_symbols(&self.focus_path, &self.focus_list)?;
        Ok(())
    }
}

/// Drop repeated symbols, keeping the first occurrence in order.
pub fn dedup(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut seen = HashSet::new();
    symbols
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
