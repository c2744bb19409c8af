use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::player::Player;

/// Ошибки формирования состава игроков.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("{0} is not a valid player: the name is already taken")]
    DuplicateName(String),
}

/// Состав игроков одной партии.
///
/// Порядок итерации — порядок регистрации; он же порядок ходов
/// и базовый порядок для таблицы мест. Имена уникальны, доступ
/// по имени идёт через явный индекс имя → позиция.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    /// Собрать состав из имён в порядке регистрации.
    /// Повторённое имя — ошибка, состав не создаётся.
    pub fn new(names: Vec<String>) -> Result<Self, RosterError> {
        let mut players = Vec::with_capacity(names.len());
        let mut by_name = HashMap::with_capacity(names.len());
        for name in names {
            if by_name.contains_key(&name) {
                return Err(RosterError::DuplicateName(name));
            }
            by_name.insert(name.clone(), players.len());
            players.push(Player::new(name));
        }
        Ok(Self { players, by_name })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Игрок по имени.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).map(|&i| &self.players[i])
    }

    /// Игрок по имени (mutable).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        let i = *self.by_name.get(name)?;
        Some(&mut self.players[i])
    }

    /// Опустошить руки всех игроков. Состав и порядок не меняются.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.clear_hand();
        }
    }
}

impl Index<usize> for Roster {
    type Output = Player;

    fn index(&self, index: usize) -> &Player {
        &self.players[index]
    }
}

impl IndexMut<usize> for Roster {
    fn index_mut(&mut self, index: usize) -> &mut Player {
        &mut self.players[index]
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

impl PartialEq for Roster {
    fn eq(&self, other: &Self) -> bool {
        self.players == other.players
    }
}

impl PartialEq<Vec<Player>> for Roster {
    fn eq(&self, other: &Vec<Player>) -> bool {
        self.players == *other
    }
}
