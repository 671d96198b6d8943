//! Snapshot types.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardFace, CardId, GameConfig, GameState, Outcome, Selection, SymbolId};

/// Glyph shown on face-down cards.
pub const HIDDEN_GLYPH: &str = "❓";

/// What a frontend may show for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceView {
    Hidden,
    Revealed(SymbolId),
    Matched(SymbolId),
}

impl FaceView {
    fn of(card: &Card) -> Self {
        match card.face {
            CardFace::Hidden => FaceView::Hidden,
            CardFace::Revealed => FaceView::Revealed(card.symbol),
            CardFace::Matched => FaceView::Matched(card.symbol),
        }
    }

    /// The visible symbol, if face-up.
    #[must_use]
    pub fn symbol(&self) -> Option<SymbolId> {
        match *self {
            FaceView::Hidden => None,
            FaceView::Revealed(symbol) | FaceView::Matched(symbol) => Some(symbol),
        }
    }
}

/// One card as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face: FaceView,
    /// Display glyph; `None` while face-down.
    pub glyph: Option<String>,
}

/// Everything needed to render the board and its header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cards: Vec<CardView>,
    pub selection: Selection,
    pub move_count: u32,
    pub match_count: u32,
    pub max_moves: u32,
    pub pair_count: usize,
    pub game_over: bool,
    pub input_locked: bool,
    /// Set once the game is over.
    pub outcome: Option<Outcome>,
    pub generation: u64,
}

impl GameSnapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        let cards = state
            .cards()
            .map(|card| {
                let face = FaceView::of(card);
                let glyph = face
                    .symbol()
                    .and_then(|symbol| config.alphabet.glyph(symbol))
                    .map(str::to_string);
                CardView {
                    id: card.id,
                    face,
                    glyph,
                }
            })
            .collect();

        Self {
            cards,
            selection: state.selection(),
            move_count: state.move_count(),
            match_count: state.match_count(),
            max_moves: config.max_moves,
            pair_count: state.pair_count(),
            game_over: state.is_game_over(),
            input_locked: state.is_input_locked(config.input_policy),
            outcome: state.outcome(),
            generation: state.generation(),
        }
    }

    /// Moves left before the budget runs out.
    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.max_moves.saturating_sub(self.move_count)
    }

    /// End-of-game message, if the game is over.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::message)
    }

    /// Render the board as text, `columns` cards per row.
    ///
    /// Face-down cards show [`HIDDEN_GLYPH`].
    #[must_use]
    pub fn render_grid(&self, columns: usize) -> String {
        let columns = columns.max(1);
        self.cards
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|card| card.glyph.as_deref().unwrap_or(HIDDEN_GLYPH))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
