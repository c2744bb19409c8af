//! Доменная модель игры: карты, колода, игроки, состав партии.

pub mod card;
pub mod deck;
pub mod player;
pub mod roster;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use player::*;
pub use roster::*;
