use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Тип события в партии. Движок только называет событие и его
/// поля — как оно будет сформулировано и показано, решает
/// принимающая сторона.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEvent {
    /// Партия началась.
    Welcome,

    /// Начало раунда.
    RoundStart { current_round: u32 },

    /// Раунд завершён, единоличный победитель.
    RoundEnd { round_winner: String },

    /// Раунд завершён ничьёй.
    RoundEndTie,

    /// Ход переходит к игроку.
    TurnStart { current_player_name: String },

    /// Игрок вытянул карту. `leading` — входит ли он после этого
    /// взятия в группу первого места текущего раунда.
    /// Счёт в поле — накопленный за всю партию.
    TurnEnd {
        leading: bool,
        current_player_name: String,
        current_card: Card,
        current_player_score: u32,
    },

    /// Колода закончилась посреди раунда.
    EmptyDeck,

    /// Партия завершена, единоличный победитель.
    GameOver { game_winner: String },

    /// Партия завершена ничьёй.
    GameOverTie,

    /// Финальная таблица мест, уже отрисованная построчно.
    FinalStandings { leaderboard: String },
}

impl GameEvent {
    /// Категория события — ключ в каталоге шаблонов сообщений.
    pub fn category(&self) -> &'static str {
        match self {
            GameEvent::Welcome => "WELCOME",
            GameEvent::RoundStart { .. } => "ROUND START",
            GameEvent::RoundEnd { .. } => "ROUND END",
            GameEvent::RoundEndTie => "ROUND END TIE",
            GameEvent::TurnStart { .. } => "TURN START",
            GameEvent::TurnEnd { leading: true, .. } => "TRUE TURN END",
            GameEvent::TurnEnd { leading: false, .. } => "FALSE TURN END",
            GameEvent::EmptyDeck => "EMPTY DECK",
            GameEvent::GameOver { .. } => "GAME OVER",
            GameEvent::GameOverTie => "GAME OVER TIE",
            GameEvent::FinalStandings { .. } => "FINAL STANDINGS",
        }
    }

    /// Именованные значения для подстановки в шаблон.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            GameEvent::Welcome
            | GameEvent::RoundEndTie
            | GameEvent::EmptyDeck
            | GameEvent::GameOverTie => Vec::new(),
            GameEvent::RoundStart { current_round } => {
                vec![("current_round", current_round.to_string())]
            }
            GameEvent::RoundEnd { round_winner } => {
                vec![("round_winner", round_winner.clone())]
            }
            GameEvent::TurnStart { current_player_name } => {
                vec![("current_player_name", current_player_name.clone())]
            }
            GameEvent::TurnEnd {
                leading: _,
                current_player_name,
                current_card,
                current_player_score,
            } => vec![
                ("current_player_name", current_player_name.clone()),
                ("current_card", current_card.to_string()),
                ("current_player_score", current_player_score.to_string()),
            ],
            GameEvent::GameOver { game_winner } => {
                vec![("game_winner", game_winner.clone())]
            }
            GameEvent::FinalStandings { leaderboard } => {
                vec![("leaderboard", leaderboard.clone())]
            }
        }
    }
}

/// Приёмник событий партии. Чистый sink: движок не зависит от того,
/// каким текстом (и зависит ли вообще) событие будет показано.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Барьер хода: блокирующее подтверждение перед взятием карты.
/// Содержимое подтверждения движку не нужно, важен сам факт.
pub trait TurnGate {
    fn wait_for_ack(&mut self);
}
