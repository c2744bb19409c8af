//! Сквозные тесты партии: сценарии с заранее выставленной колодой
//! и записью всего потока событий.

use highcard_engine::domain::{Card, Deck, Rank, RosterError, Suit};
use highcard_engine::engine::{
    EventSink, Game, GameConfig, GameError, GameEvent, RandomSource, TurnGate,
};
use highcard_engine::infra::MessageCatalog;

/// RNG-заглушка: shuffle ничего не делает, колода остаётся
/// в исходном порядке; вариант шаблона всегда первый.
#[derive(Default, Debug)]
struct NoopRng;

impl RandomSource for NoopRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

/// Барьер хода без ожидания, со счётчиком подтверждений.
#[derive(Default)]
struct InstantGate {
    acks: usize,
}

impl TurnGate for InstantGate {
    fn wait_for_ack(&mut self) {
        self.acks += 1;
    }
}

/// Приёмник, записывающий каждое событие отрисованной строкой.
struct RecordingSink {
    catalog: MessageCatalog,
    rng: NoopRng,
    lines: Vec<String>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            catalog: MessageCatalog::from_json(TEST_CATALOG).expect("test catalog is valid"),
            rng: NoopRng,
            lines: Vec::new(),
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        let line = self.catalog.render(&mut self.rng, event);
        self.lines.push(line);
    }
}

/// Одновариантный каталог: вывод детерминирован независимо от RNG.
const TEST_CATALOG: &str = r#"{
    "WELCOME": ["Welcome."],
    "ROUND START": ["Round $current_round."],
    "ROUND END": ["$round_winner won the round."],
    "ROUND END TIE": ["Round was a tie."],
    "TURN START": ["$current_player_name turn."],
    "TRUE TURN END": ["Positive, $current_player_name drew $current_card bringing score to $current_player_score."],
    "FALSE TURN END": ["Negative, $current_player_name drew $current_card bringing score to $current_player_score."],
    "EMPTY DECK": ["Deck empty."],
    "GAME OVER": ["Game over, $game_winner won."],
    "GAME OVER TIE": ["Game was a tie."]
}"#;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Колода из списка карт снизу вверх: последняя карта — верх колоды.
fn deck_of(cards: &[(Suit, Rank)]) -> Deck {
    let mut deck = Deck::empty();
    for &(suit, rank) in cards {
        deck.add_card(Card::new(suit, rank));
    }
    deck
}

//
// Ошибки создания партии
//
#[test]
fn construction_fails_fast() {
    let err = Game::new(Vec::new(), GameConfig::default(), NoopRng).unwrap_err();
    assert_eq!(err, GameError::NoPlayers);

    let err = Game::new(
        names(&["Berkelly"]),
        GameConfig { max_rounds: 0 },
        NoopRng,
    )
    .unwrap_err();
    assert_eq!(err, GameError::InvalidMaxRounds(0));

    let err = Game::new(names(&["Berkelly", "Berkelly"]), GameConfig::default(), NoopRng)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::Roster(RosterError::DuplicateName("Berkelly".to_string()))
    );
}

//
// Жизненный цикл: активность, new_game, end_game
//
#[test]
fn game_lifecycle() {
    let deck = deck_of(&[(Suit::Spades, Rank::Ten)]);
    let mut game = Game::with_deck(
        names(&["Berkelly"]),
        GameConfig { max_rounds: 1 },
        deck,
        NoopRng,
    )
    .unwrap();
    assert!(game.is_active());
    assert_eq!(game.current_round(), 1);

    let mut sink = RecordingSink::new();
    let mut gate = InstantGate::default();
    game.play(&mut sink, &mut gate).unwrap();
    assert!(!game.is_active());

    // Новая партия: активна, руки пусты, колода снова полная.
    game.new_game();
    assert!(game.is_active());
    assert_eq!(game.current_round(), 1);
    assert_eq!(game.deck().len(), 52);
    assert!(game.roster().iter().all(|p| p.hand.is_empty()));

    game.end_game();
    assert!(!game.is_active());
}

#[test]
fn with_deck_adopts_deck_as_is() {
    let deck = deck_of(&[(Suit::Clubs, Rank::Six), (Suit::Spades, Rank::Ten)]);
    let game = Game::with_deck(names(&["Berkelly"]), GameConfig::default(), deck, NoopRng)
        .unwrap();
    assert_eq!(
        game.deck().top_card(),
        Some(&Card::new(Suit::Spades, Rank::Ten))
    );
    assert_eq!(game.deck().len(), 2);
}

//
// Сценарий: один игрок, одна карта, один раунд
//
#[test]
fn single_player_single_round() {
    let deck = deck_of(&[(Suit::Spades, Rank::Ten)]);
    let mut game = Game::with_deck(
        names(&["Berkelly"]),
        GameConfig { max_rounds: 1 },
        deck,
        NoopRng,
    )
    .unwrap();

    let mut sink = RecordingSink::new();
    let mut gate = InstantGate::default();
    game.play(&mut sink, &mut gate).unwrap();

    assert_eq!(
        sink.lines,
        vec![
            "Welcome.",
            "Round 1.",
            "Berkelly turn.",
            "Positive, Berkelly drew 10 of Spades bringing score to 10.",
            "Berkelly won the round.",
            "Game over, Berkelly won.",
            "1: Berkelly (10)",
        ]
    );
    assert_eq!(gate.acks, 1);
    assert_eq!(game.roster().get("Berkelly").unwrap().score(0), 10);
}

//
// Сценарий: колода исчерпана посреди партии
//
#[test]
fn empty_deck_recovers_with_fresh_deck() {
    // Одна карта на два раунда: во втором взятие упирается в пустую
    // колоду. После пересборки (без перемешивания — NoopRng) верхняя
    // карта свежей колоды — Ace of Clubs.
    let deck = deck_of(&[(Suit::Clubs, Rank::Nine)]);
    let mut game = Game::with_deck(
        names(&["Berkelly"]),
        GameConfig { max_rounds: 2 },
        deck,
        NoopRng,
    )
    .unwrap();

    let mut sink = RecordingSink::new();
    let mut gate = InstantGate::default();
    game.play(&mut sink, &mut gate).unwrap();

    assert_eq!(
        sink.lines,
        vec![
            "Welcome.",
            "Round 1.",
            "Berkelly turn.",
            "Positive, Berkelly drew 9 of Clubs bringing score to 36.",
            "Berkelly won the round.",
            "Round 2.",
            "Berkelly turn.",
            "Deck empty.",
            "Positive, Berkelly drew Ace of Clubs bringing score to 92.",
            "Berkelly won the round.",
            "Game over, Berkelly won.",
            "1: Berkelly (92)",
        ]
    );
    // Ровно один цикл пересборки: из свежих 52 карт взята одна.
    assert_eq!(game.deck().len(), 51);
}

//
// Сценарий: три игрока, девять карт, ничья в конце
//
#[test]
fn three_player_game_with_final_tie() {
    // Снизу вверх; верх колоды — 10 of Spades, её тянут первой.
    let deck = deck_of(&[
        (Suit::Clubs, Rank::Six),
        (Suit::Spades, Rank::Eight),
        (Suit::Diamonds, Rank::Three),
        (Suit::Clubs, Rank::Nine),
        (Suit::Clubs, Rank::Ace),
        (Suit::Spades, Rank::King),
        (Suit::Diamonds, Rank::Five),
        (Suit::Diamonds, Rank::Three),
        (Suit::Spades, Rank::Ten),
    ]);
    let mut game = Game::with_deck(
        names(&["Berkelly", "Cez", "Tonto"]),
        GameConfig::default(),
        deck,
        NoopRng,
    )
    .unwrap();

    let mut sink = RecordingSink::new();
    let mut gate = InstantGate::default();
    game.play(&mut sink, &mut gate).unwrap();

    // Лидерство считается по очкам текущего раунда и пересчитывается
    // после каждого взятия: в третьем раунде каждый игрок в момент
    // своего хода выходит вперёд, и лидерство дважды переходит.
    assert_eq!(
        sink.lines,
        vec![
            "Welcome.",
            "Round 1.",
            "Berkelly turn.",
            "Positive, Berkelly drew 10 of Spades bringing score to 10.",
            "Cez turn.",
            "Negative, Cez drew 3 of Diamonds bringing score to 6.",
            "Tonto turn.",
            "Positive, Tonto drew 5 of Diamonds bringing score to 10.",
            "Round was a tie.",
            "Round 2.",
            "Berkelly turn.",
            "Positive, Berkelly drew King of Spades bringing score to 23.",
            "Cez turn.",
            "Positive, Cez drew Ace of Clubs bringing score to 62.",
            "Tonto turn.",
            "Negative, Tonto drew 9 of Clubs bringing score to 46.",
            "Cez won the round.",
            "Round 3.",
            "Berkelly turn.",
            "Positive, Berkelly drew 3 of Diamonds bringing score to 29.",
            "Cez turn.",
            "Positive, Cez drew 8 of Spades bringing score to 70.",
            "Tonto turn.",
            "Positive, Tonto drew 6 of Clubs bringing score to 70.",
            "Tonto won the round.",
            "Game was a tie.",
            "1: Cez (70)\n1: Tonto (70)\n2: Berkelly (29)",
        ]
    );
    // Три раунда по три хода — девять подтверждений.
    assert_eq!(gate.acks, 9);

    // Накопленный счёт равен сумме раундовых.
    for player in game.roster() {
        let by_rounds: u32 = (1..=3).map(|r| player.score(r)).sum();
        assert_eq!(player.score(0), by_rounds);
    }
}

//
// Повторная партия тем же составом
//
#[test]
fn new_game_replays_cleanly() {
    let deck = deck_of(&[(Suit::Spades, Rank::Ten)]);
    let mut game = Game::with_deck(
        names(&["Berkelly"]),
        GameConfig { max_rounds: 1 },
        deck,
        NoopRng,
    )
    .unwrap();

    let mut sink = RecordingSink::new();
    let mut gate = InstantGate::default();
    game.play(&mut sink, &mut gate).unwrap();
    assert!(!game.is_active());

    game.new_game();
    let mut sink = RecordingSink::new();
    game.play(&mut sink, &mut gate).unwrap();

    // Колода пересобрана без перемешивания — сверху Ace of Clubs.
    assert_eq!(
        sink.lines,
        vec![
            "Welcome.",
            "Round 1.",
            "Berkelly turn.",
            "Positive, Berkelly drew Ace of Clubs bringing score to 56.",
            "Berkelly won the round.",
            "Game over, Berkelly won.",
            "1: Berkelly (56)",
        ]
    );
}
