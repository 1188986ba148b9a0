//! Display names for the two markers.

use crate::error::RenameError;
use crate::types::Symbol;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Default display name for X.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Default display name for O.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Default maximum name length, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 20;

/// Maps each marker to a display name.
///
/// The registry lives independently of the move log: renaming never
/// changes turns or the board, and restarting a game keeps the names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    x: String,
    o: String,
    max_name_len: usize,
}

impl PlayerRegistry {
    /// Creates a registry with the default names and length limit.
    #[instrument]
    pub fn new() -> Self {
        Self {
            x: DEFAULT_X_NAME.to_string(),
            o: DEFAULT_O_NAME.to_string(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }

    /// Creates a registry with custom names, validated like a rename.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError`] if either name is empty after trimming or
    /// longer than `max_name_len`.
    #[instrument]
    pub fn with_names(x: &str, o: &str, max_name_len: usize) -> Result<Self, RenameError> {
        let mut registry = Self {
            max_name_len,
            ..Self::new()
        };
        registry.rename(Symbol::X, x)?;
        registry.rename(Symbol::O, o)?;
        Ok(registry)
    }

    /// Returns the display name for a marker.
    pub fn name(&self, symbol: Symbol) -> &str {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    /// Maximum accepted name length, in characters.
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Iterates over `(marker, name)` pairs, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        Symbol::iter().map(move |symbol| (symbol, self.name(symbol)))
    }

    /// Replaces the name for a marker.
    ///
    /// Surrounding whitespace is trimmed. On error the prior name stays.
    #[instrument(skip(self))]
    pub fn rename(&mut self, symbol: Symbol, name: &str) -> Result<(), RenameError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            warn!(?symbol, "Rejected empty player name");
            return Err(RenameError::EmptyName);
        }

        let len = trimmed.chars().count();
        if len > self.max_name_len {
            warn!(?symbol, len, max = self.max_name_len, "Rejected overlong player name");
            return Err(RenameError::NameTooLong {
                len,
                max: self.max_name_len,
            });
        }

        let slot = match symbol {
            Symbol::X => &mut self.x,
            Symbol::O => &mut self.o,
        };
        debug!(?symbol, old = %slot, new = trimmed, "Renamed player");
        *slot = trimmed.to_string();
        Ok(())
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let players = PlayerRegistry::new();
        assert_eq!(players.name(Symbol::X), "Player 1");
        assert_eq!(players.name(Symbol::O), "Player 2");
        assert_eq!(players.max_name_len(), 20);
    }

    #[test]
    fn test_rename_trims() {
        let mut players = PlayerRegistry::new();
        players.rename(Symbol::O, "  Ada  ").unwrap();
        assert_eq!(players.name(Symbol::O), "Ada");
        assert_eq!(players.name(Symbol::X), "Player 1");
    }

    #[test]
    fn test_blank_name_keeps_prior() {
        let mut players = PlayerRegistry::new();
        assert_eq!(players.rename(Symbol::X, "   "), Err(RenameError::EmptyName));
        assert_eq!(players.rename(Symbol::X, ""), Err(RenameError::EmptyName));
        assert_eq!(players.name(Symbol::X), "Player 1");
    }

    #[test]
    fn test_length_counts_chars() {
        let mut players = PlayerRegistry::with_names("a", "b", 3).unwrap();
        assert!(players.rename(Symbol::X, "äöü").is_ok());
        assert_eq!(
            players.rename(Symbol::X, "abcd"),
            Err(RenameError::NameTooLong { len: 4, max: 3 })
        );
        assert_eq!(players.name(Symbol::X), "äöü");
    }

    #[test]
    fn test_with_names_validates() {
        assert_eq!(
            PlayerRegistry::with_names("Ada", " ", 20),
            Err(RenameError::EmptyName)
        );
    }

    #[test]
    fn test_iter_order() {
        let players = PlayerRegistry::with_names("Ada", "Grace", 20).unwrap();
        let pairs: Vec<_> = players.iter().collect();
        assert_eq!(pairs, vec![(Symbol::X, "Ada"), (Symbol::O, "Grace")]);
    }
}
