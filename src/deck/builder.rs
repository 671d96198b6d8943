//! Deck builder implementation.

use crate::core::{Alphabet, Card, CardId, DeckError, GameRng, SymbolId};

/// Deals decks for one alphabet.
#[derive(Clone, Copy, Debug)]
pub struct DeckBuilder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> DeckBuilder<'a> {
    /// Create a builder for `alphabet`.
    #[must_use]
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    /// The doubled symbol multiset in alphabet order.
    #[must_use]
    pub fn pairs(&self) -> Vec<SymbolId> {
        self.alphabet.symbols().flat_map(|s| [s, s]).collect()
    }

    /// Deal a uniformly shuffled deck.
    #[must_use]
    pub fn shuffled(&self, rng: &mut GameRng) -> Vec<Card> {
        let mut symbols = self.pairs();
        rng.shuffle(&mut symbols);
        Self::deal(symbols)
    }

    /// Deal a deck in a fixed order.
    ///
    /// The order must hold every alphabet symbol exactly twice.
    pub fn from_order(&self, order: &[SymbolId]) -> Result<Vec<Card>, DeckError> {
        let expected = self.alphabet.len() * 2;
        if order.len() != expected {
            return Err(DeckError::WrongLength {
                expected,
                actual: order.len(),
            });
        }

        let mut counts = vec![0usize; self.alphabet.len()];
        for &symbol in order {
            if !self.alphabet.contains(symbol) {
                return Err(DeckError::UnknownSymbol(symbol));
            }
            counts[symbol.index()] += 1;
        }

        for (symbol, count) in self.alphabet.symbols().zip(counts) {
            if count != 2 {
                return Err(DeckError::NotPaired { symbol, count });
            }
        }

        Ok(Self::deal(order.to_vec()))
    }

    fn deal(symbols: Vec<SymbolId>) -> Vec<Card> {
        symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardFace;

    fn ab() -> Alphabet {
        Alphabet::new(["A", "B"]).unwrap()
    }

    #[test]
    fn test_pairs_are_doubled_in_order() {
        let alphabet = ab();
        let pairs = DeckBuilder::new(&alphabet).pairs();

        assert_eq!(
            pairs,
            vec![SymbolId::new(0), SymbolId::new(0), SymbolId::new(1), SymbolId::new(1)]
        );
    }

    #[test]
    fn test_shuffled_deck_shape() {
        let alphabet = Alphabet::default();
        let mut rng = GameRng::new(42);
        let deck = DeckBuilder::new(&alphabet).shuffled(&mut rng);

        assert_eq!(deck.len(), 24);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id.index(), i);
            assert_eq!(card.face, CardFace::Hidden);
        }
        for symbol in alphabet.symbols() {
            assert_eq!(deck.iter().filter(|c| c.symbol == symbol).count(), 2);
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let alphabet = Alphabet::default();
        let builder = DeckBuilder::new(&alphabet);

        let deck1 = builder.shuffled(&mut GameRng::new(9));
        let deck2 = builder.shuffled(&mut GameRng::new(9));

        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_from_order() {
        let alphabet = ab();
        let (a, b) = (SymbolId::new(0), SymbolId::new(1));

        let deck = DeckBuilder::new(&alphabet).from_order(&[a, b, a, b]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck[2].symbol, a);
        assert_eq!(deck[3].id, CardId::new(3));
    }

    #[test]
    fn test_from_order_wrong_length() {
        let alphabet = ab();
        let a = SymbolId::new(0);

        let result = DeckBuilder::new(&alphabet).from_order(&[a, a]);
        assert_eq!(result, Err(DeckError::WrongLength { expected: 4, actual: 2 }));
    }

    #[test]
    fn test_from_order_unpaired() {
        let alphabet = ab();
        let (a, b) = (SymbolId::new(0), SymbolId::new(1));

        let result = DeckBuilder::new(&alphabet).from_order(&[a, a, a, b]);
        assert_eq!(result, Err(DeckError::NotPaired { symbol: a, count: 3 }));
    }

    #[test]
    fn test_from_order_unknown_symbol() {
        let alphabet = ab();
        let (a, b) = (SymbolId::new(0), SymbolId::new(1));

        let result = DeckBuilder::new(&alphabet).from_order(&[a, b, a, SymbolId::new(5)]);
        assert_eq!(result, Err(DeckError::UnknownSymbol(SymbolId::new(5))));
    }
}
