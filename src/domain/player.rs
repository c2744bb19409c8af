use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;

/// Игрок: имя и рука из вытянутых карт.
///
/// Порядок карт в руке — это порядок, в котором они были вытянуты:
/// карта раунда `r` лежит в `hand.cards[r - 1]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Deck,
}

impl Player {
    /// Новый игрок с пустой рукой.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Deck::empty(),
        }
    }

    /// Добавить вытянутую карту в конец руки. Всегда успешно.
    pub fn draw_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Опустошить руку, имя сохраняется.
    pub fn clear_hand(&mut self) {
        self.hand = Deck::empty();
    }

    /// Очки игрока.
    ///
    /// `round == 0` — сумма очков всех карт руки.
    /// `round == r > 0` — очки карты, вытянутой в раунде `r`,
    /// либо 0, если игрок ещё не вытянул столько карт.
    pub fn score(&self, round: u32) -> u32 {
        if round == 0 {
            self.hand.iter().map(|card| card.score()).sum()
        } else {
            self.hand
                .cards
                .get(round as usize - 1)
                .map_or(0, |card| card.score())
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} holds {} totalling {} points",
            self.name,
            self.hand,
            self.score(0)
        )
    }
}
