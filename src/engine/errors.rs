use thiserror::Error;

use crate::domain::roster::RosterError;

/// Ошибки создания и ведения партии.
///
/// Все варианты, кроме `Internal`, возможны только при создании:
/// частично построенной партии не бывает. Исчерпание колоды
/// посреди раунда ошибкой не является — движок восстанавливается
/// сам (новая колода + перемешивание + повторное взятие).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("not a valid game: invalid number of players")]
    NoPlayers,

    #[error("not a valid game: invalid max number of rounds ({0})")]
    InvalidMaxRounds(u32),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("internal error: {0}")]
    Internal(&'static str),
}
