use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт: упорядоченный список, верх колоды — конец вектора.
/// Перемешивание делает вызывающая сторона через `RandomSource`
/// (случайностью владеет engine, порядком — колода).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Пустая колода (например, рука игрока в начале игры).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Стандартная неперемешанная колода в порядке:
    /// Spades 2..A, Diamonds 2..A, Hearts 2..A, Clubs 2..A.
    /// Верхняя карта — Ace of Clubs.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Deck { cards }
    }

    /// Вернуть колоду к полному упорядоченному набору из 52 карт.
    pub fn refill(&mut self) {
        *self = Self::standard();
    }

    /// Положить карту на верх колоды.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Верхняя карта без снятия.
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Новая колода, сгруппированная по мастям в заданном порядке;
    /// внутри масти карты идут по возрастанию ранга.
    pub fn sorted_by_suits(&self, order: &[Suit]) -> Deck {
        let mut sorted = Deck::empty();
        for &suit in order {
            let mut of_suit: Vec<Card> =
                self.cards.iter().copied().filter(|c| c.suit == suit).collect();
            of_suit.sort_by_key(|c| c.rank);
            for card in of_suit {
                sorted.add_card(card);
            }
        }
        sorted
    }
}

impl PartialEq<Vec<Card>> for Deck {
    fn eq(&self, other: &Vec<Card>) -> bool {
        self.cards == *other
    }
}

impl PartialEq<[Card]> for Deck {
    fn eq(&self, other: &[Card]) -> bool {
        self.cards == other
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    /// Формат вида `[10 of Spades, King of Hearts]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}
