//! Symbols and the matching alphabet.
//!
//! A `SymbolId` is an opaque value with equality only. The `Alphabet` maps
//! each id to its display glyph, so the game core never compares strings.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// The default pictograms, one per pair.
pub const DEFAULT_SYMBOLS: [&str; 12] = [
    "🐰", "🐱", "🐻", "🐼", "🐸", "🐤", "🐶", "🦊", "🦁", "🐯", "🦉", "🐧",
];

/// Identifier of one symbol in an [`Alphabet`].
///
/// Equal to the symbol's position in the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position of this symbol in its alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A fixed, non-empty set of distinct glyphs.
///
/// ## Example
///
/// ```
/// use memo_match::core::{Alphabet, SymbolId};
///
/// let alphabet = Alphabet::new(["A", "B"]).unwrap();
///
/// assert_eq!(alphabet.len(), 2);
/// assert_eq!(alphabet.glyph(SymbolId::new(1)), Some("B"));
/// assert_eq!(alphabet.lookup("A"), Some(SymbolId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Alphabet {
    glyphs: Vec<String>,
    #[serde(skip)]
    by_glyph: FxHashMap<String, SymbolId>,
}

impl Alphabet {
    /// Build an alphabet from distinct glyphs.
    pub fn new<I, S>(glyphs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();

        if glyphs.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if glyphs.len() > usize::from(u16::MAX) {
            return Err(ConfigError::AlphabetTooLarge { len: glyphs.len() });
        }

        let mut by_glyph = FxHashMap::default();
        for (i, glyph) in glyphs.iter().enumerate() {
            let id = SymbolId::new(i as u16);
            if by_glyph.insert(glyph.clone(), id).is_some() {
                return Err(ConfigError::DuplicateGlyph(glyph.clone()));
            }
        }

        Ok(Self { glyphs, by_glyph })
    }

    /// Number of symbols (`N`); a deck holds `2N` cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false for a constructed alphabet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Display glyph for a symbol.
    #[must_use]
    pub fn glyph(&self, symbol: SymbolId) -> Option<&str> {
        self.glyphs.get(symbol.index()).map(String::as_str)
    }

    /// Find the symbol displayed as `glyph`.
    #[must_use]
    pub fn lookup(&self, glyph: &str) -> Option<SymbolId> {
        self.by_glyph.get(glyph).copied()
    }

    /// Check whether a symbol belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        symbol.index() < self.glyphs.len()
    }

    /// Iterate over all symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> {
        (0..self.glyphs.len() as u16).map(SymbolId::new)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let glyphs: Vec<String> = DEFAULT_SYMBOLS.iter().map(|g| (*g).to_string()).collect();
        let by_glyph = glyphs
            .iter()
            .enumerate()
            .map(|(i, g)| (g.clone(), SymbolId::new(i as u16)))
            .collect();
        Self { glyphs, by_glyph }
    }
}

impl TryFrom<Vec<String>> for Alphabet {
    type Error = ConfigError;

    fn try_from(glyphs: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(glyphs)
    }
}

impl From<Alphabet> for Vec<String> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();

        assert_eq!(alphabet.len(), 12);
        assert_eq!(alphabet.glyph(SymbolId::new(0)), Some("🐰"));
        assert_eq!(alphabet.lookup("🐧"), Some(SymbolId::new(11)));
        assert!(alphabet.contains(SymbolId::new(11)));
        assert!(!alphabet.contains(SymbolId::new(12)));
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        let result = Alphabet::new(Vec::<String>::new());
        assert_eq!(result, Err(ConfigError::EmptyAlphabet));
    }

    #[test]
    fn test_duplicate_glyph_rejected() {
        let result = Alphabet::new(["A", "B", "A"]);
        assert_eq!(result, Err(ConfigError::DuplicateGlyph("A".to_string())));
    }

    #[test]
    fn test_symbols_in_order() {
        let alphabet = Alphabet::new(["x", "y", "z"]).unwrap();
        let symbols: Vec<_> = alphabet.symbols().collect();

        assert_eq!(symbols, vec![SymbolId::new(0), SymbolId::new(1), SymbolId::new(2)]);
    }

    #[test]
    fn test_alphabet_serde() {
        let alphabet = Alphabet::new(["A", "B"]).unwrap();

        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#"["A","B"]"#);

        let restored: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lookup("B"), Some(SymbolId::new(1)));

        let duplicate: Result<Alphabet, _> = serde_json::from_str(r#"["A","A"]"#);
        assert!(duplicate.is_err());
    }
}
