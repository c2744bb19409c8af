//! Движок партии: таблица мест и оркестрация раундов/ходов.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `play` – сыграть партию от приветствия до финальной таблицы
//!   - `new_game` – начать новую партию тем же составом
//!   - `Leaderboard::new` – таблица мест по снимку состава

pub mod errors;
pub mod events;
pub mod game_loop;
pub mod ranking;

pub use errors::GameError;
pub use events::{EventSink, GameEvent, TurnGate};
pub use game_loop::{Game, GameConfig};
pub use ranking::{Leaderboard, Place};

/// RNG-интерфейс движка. Реализации живут в infra
/// (обёртки над `rand`), тесты подставляют свои.
pub trait RandomSource {
    /// Перемешать срез на месте.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Индекс в диапазоне `0..len` (0 при `len <= 1`).
    /// Используется для выбора варианта шаблона сообщения.
    fn pick(&mut self, len: usize) -> usize;
}
