use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::roster::Roster;
use crate::engine::errors::GameError;
use crate::engine::events::{EventSink, GameEvent, TurnGate};
use crate::engine::ranking::Leaderboard;
use crate::engine::RandomSource;

/// Конфигурация партии.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Максимальное число раундов, не меньше 1.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_rounds: 3 }
    }
}

/// Партия: состав игроков, общая колода и счётчик раундов.
///
/// Жизненный цикл: создание (активна, раунд 1) → `play` гоняет
/// раунды, пока не достигнут лимит → партия неактивна. `new_game`
/// возвращает её в исходное состояние тем же составом.
#[derive(Debug)]
pub struct Game<R: RandomSource> {
    roster: Roster,
    deck: Deck,
    rng: R,
    current_round: u32,
    max_rounds: u32,
    active: bool,
}

impl<R: RandomSource> Game<R> {
    /// Новая партия со свежей перемешанной стандартной колодой.
    ///
    /// Ошибки создания фатальны и немедленны: пустой список имён,
    /// лимит раундов меньше 1, повторённое имя. Частично
    /// построенной партии не бывает.
    pub fn new(names: Vec<String>, config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        let mut deck = Deck::standard();
        rng.shuffle(&mut deck.cards);
        Self::with_deck(names, config, deck, rng)
    }

    /// Новая партия с готовой колодой. Колода принимается как есть,
    /// без перемешивания — порядок задаёт вызывающая сторона.
    pub fn with_deck(
        names: Vec<String>,
        config: GameConfig,
        deck: Deck,
        rng: R,
    ) -> Result<Self, GameError> {
        if config.max_rounds < 1 {
            return Err(GameError::InvalidMaxRounds(config.max_rounds));
        }
        if names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let roster = Roster::new(names)?;
        Ok(Self {
            roster,
            deck,
            rng,
            current_round: 1,
            max_rounds: config.max_rounds,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Принудительно завершить партию.
    pub fn end_game(&mut self) {
        self.active = false;
    }

    /// Начать новую партию тем же составом: колода заново собрана
    /// и перемешана, руки пусты, счётчик раундов на 1.
    pub fn new_game(&mut self) {
        self.active = true;
        self.deck.refill();
        self.rng.shuffle(&mut self.deck.cards);
        self.current_round = 1;
        self.roster.reset();
        debug!("new game started");
    }

    /// Сыграть партию целиком.
    ///
    /// Раунды идут, пока партия активна; после каждого объявляется
    /// победитель раунда (или ничья), по завершении — победитель
    /// партии и финальная таблица. Исчерпание колоды по дороге
    /// восстанавливается внутри и до вызывающей стороны не доходит.
    pub fn play(
        &mut self,
        sink: &mut impl EventSink,
        gate: &mut impl TurnGate,
    ) -> Result<(), GameError> {
        sink.emit(&GameEvent::Welcome);
        while self.active {
            let round = self.current_round;
            debug!(round, "round started");
            sink.emit(&GameEvent::RoundStart { current_round: round });
            self.next_round(round, sink, gate)?;

            let standings = Leaderboard::new(&self.roster, round);
            let top = standings.first();
            if top.tie {
                sink.emit(&GameEvent::RoundEndTie);
            } else {
                sink.emit(&GameEvent::RoundEnd {
                    round_winner: top.name.unwrap_or_default(),
                });
            }

            if round >= self.max_rounds {
                self.end_game();
            } else {
                self.current_round += 1;
            }
        }

        let standings = Leaderboard::overall(&self.roster);
        let top = standings.first();
        if top.tie {
            info!(score = top.score, "game over: tie");
            sink.emit(&GameEvent::GameOverTie);
        } else {
            info!(winner = top.name.as_deref(), score = top.score, "game over");
            sink.emit(&GameEvent::GameOver {
                game_winner: top.name.unwrap_or_default(),
            });
        }
        sink.emit(&GameEvent::FinalStandings {
            leaderboard: standings.to_string(),
        });
        Ok(())
    }

    /// Один раунд: каждый игрок в порядке регистрации делает ровно
    /// один ход — подтверждение, взятие карты, карта в руку.
    ///
    /// Принадлежность к первому месту раунда пересчитывается заново
    /// после каждого взятия и только по очкам этого раунда: взятия
    /// следующих игроков могут лишить лидерства тех, кто уже сходил.
    fn next_round(
        &mut self,
        round: u32,
        sink: &mut impl EventSink,
        gate: &mut impl TurnGate,
    ) -> Result<(), GameError> {
        for idx in 0..self.roster.len() {
            let player_name = self.roster[idx].name.clone();
            sink.emit(&GameEvent::TurnStart {
                current_player_name: player_name.clone(),
            });
            gate.wait_for_ack();

            let card = self.draw_with_refill(sink)?;
            self.roster[idx].draw_card(card);

            let standings = Leaderboard::new(&self.roster, round);
            let leading = standings.first().names.iter().any(|n| *n == player_name);
            sink.emit(&GameEvent::TurnEnd {
                leading,
                current_player_name: player_name,
                current_card: card,
                current_player_score: self.roster[idx].score(0),
            });
        }
        Ok(())
    }

    /// Взять карту из общей колоды. Пустая колода — не ошибка:
    /// один цикл «новая колода + перемешивание + повторное взятие»,
    /// который не может не дать карту (полная колода не пуста).
    fn draw_with_refill(&mut self, sink: &mut impl EventSink) -> Result<Card, GameError> {
        match self.deck.draw_one() {
            Some(card) => Ok(card),
            None => {
                debug!("deck exhausted mid-round, refilling");
                sink.emit(&GameEvent::EmptyDeck);
                self.deck.refill();
                self.rng.shuffle(&mut self.deck.cards);
                self.deck
                    .draw_one()
                    .ok_or(GameError::Internal("refilled deck has no cards"))
            }
        }
    }
}
