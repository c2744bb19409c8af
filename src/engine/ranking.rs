use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::roster::Roster;

/// Одно место таблицы: все игроки с одинаковым счётом.
///
/// `player`/`name` — представитель группы (первый по порядку
/// сортировки), `players`/`names` — группа целиком. Пустое место
/// (`Place::empty`) возвращается вместо несуществующей позиции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub player: Option<Player>,
    pub players: Vec<Player>,
    pub name: Option<String>,
    pub names: Vec<String>,
    pub place: u32,
    pub score: u32,
    pub tie: bool,
}

impl Place {
    /// Пустое место: нет представителя, нет участников, счёт 0.
    pub fn empty() -> Self {
        Self {
            player: None,
            players: Vec::new(),
            name: None,
            names: Vec::new(),
            place: 0,
            score: 0,
            tie: false,
        }
    }
}

/// Таблица мест: снимок состава, сгруппированный по убыванию счёта.
///
/// Считается заново при каждом запросе и не кэшируется: внутри
/// раунда руки меняются после каждого взятия, и следующий запрос
/// может дать другой результат.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Leaderboard {
    places: Vec<Place>,
}

impl Leaderboard {
    /// Построить таблицу по счёту раунда `round`
    /// (0 — накопленный счёт всей партии).
    ///
    /// Сортировка стабильная: при равном счёте игроки остаются
    /// в порядке регистрации. Номера мест плотные — группа из N
    /// игроков сдвигает следующий номер ровно на 1, а не на N:
    /// двое на первом месте и один ниже дают места {1, 1, 2}.
    pub fn new(roster: &Roster, round: u32) -> Self {
        let mut order: Vec<&Player> = roster.iter().collect();
        order.sort_by(|a, b| b.score(round).cmp(&a.score(round)));

        let mut places = Vec::new();
        let mut i = 0;
        while i < order.len() {
            let score = order[i].score(round);
            let mut group: Vec<Player> = Vec::new();
            while i < order.len() && order[i].score(round) == score {
                group.push(order[i].clone());
                i += 1;
            }
            places.push(Place {
                player: group.first().cloned(),
                name: group.first().map(|p| p.name.clone()),
                names: group.iter().map(|p| p.name.clone()).collect(),
                place: places.len() as u32 + 1,
                score,
                tie: group.len() > 1,
                players: group,
            });
        }
        Self { places }
    }

    /// Таблица по накопленному счёту всей партии.
    pub fn overall(roster: &Roster) -> Self {
        Self::new(roster, 0)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Место с номером `position` (нумерация с 1).
    /// Несуществующая позиция — пустое место, не ошибка.
    pub fn place(&self, position: u32) -> Place {
        position
            .checked_sub(1)
            .and_then(|i| self.places.get(i as usize))
            .cloned()
            .unwrap_or_else(Place::empty)
    }

    pub fn first(&self) -> Place {
        self.place(1)
    }

    pub fn second(&self) -> Place {
        self.place(2)
    }

    pub fn third(&self) -> Place {
        self.place(3)
    }
}

impl fmt::Display for Leaderboard {
    /// Одна строка на игрока, в порядке мест, формат
    /// `<место>: <имя> (<счёт>)`. Без завершающего перевода строки;
    /// пустой состав — пустая строка.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first_line = true;
        for place in &self.places {
            for name in &place.names {
                if !first_line {
                    writeln!(f)?;
                }
                write!(f, "{}: {} ({})", place.place, name, place.score)?;
                first_line = false;
            }
        }
        Ok(())
    }
}
