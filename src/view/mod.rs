//! Read-only view of a game for the presentation layer.
//!
//! A [`GameSnapshot`] holds everything a frontend needs to draw the board
//! and the header stats. Hidden cards carry no symbol, so a snapshot can be
//! handed to untrusted rendering code without leaking the layout.

mod snapshot;

pub use snapshot::{CardView, FaceView, GameSnapshot, HIDDEN_GLYPH};
