use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки создания карты из текстовых меток.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("the card suit '{0}' does not exist")]
    UnknownSuit(String),

    #[error("the card rank '{0}' does not exist")]
    UnknownRank(String),
}

/// Масть карты. Числовое значение фиксировано и участвует
/// в подсчёте очков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades = 1,   // ♠
    Diamonds = 2, // ♦
    Hearts = 3,   // ♥
    Clubs = 4,    // ♣
}

impl Suit {
    /// Все масти в объявленном порядке.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    pub const fn value(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
        }
    }
}

/// Ранг карты. Значения 2..14, Jack=11 .. Ace=14.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги по возрастанию.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// Игральная карта (стандартная 52-карточная колода).
///
/// Равенство — по рангу и масти. Порядок есть только у ранга:
/// на самой карте `Ord` не реализован, иначе он был бы
/// несовместим с `Eq`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Карта из текстовых меток, со строгой проверкой обеих.
    pub fn from_labels(suit: &str, rank: &str) -> Result<Self, CardError> {
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }

    /// Очки карты: значение масти, умноженное на значение ранга.
    pub const fn score(self) -> u32 {
        self.suit.value() * self.rank.value()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    /// Формат вида `10 of Spades`, `King of Hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Парсинг метки масти: точное имя, как объявлено.
impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| CardError::UnknownSuit(s.to_string()))
    }
}

/// Парсинг метки ранга: "2".."10" либо "Jack".."Ace".
impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}
