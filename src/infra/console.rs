use std::io::{self, BufRead, Write};

use crate::engine::{EventSink, GameEvent, RandomSource, TurnGate};
use crate::infra::messages::MessageCatalog;

/// Консольный приёмник событий: каждое событие — одна строка
/// в stdout, формулировка берётся из каталога.
pub struct ConsoleSink<R: RandomSource> {
    catalog: MessageCatalog,
    rng: R,
}

impl<R: RandomSource> ConsoleSink<R> {
    pub fn new(catalog: MessageCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }
}

impl<R: RandomSource> EventSink for ConsoleSink<R> {
    fn emit(&mut self, event: &GameEvent) {
        println!("{}", self.catalog.render(&mut self.rng, event));
    }
}

/// Консольный барьер хода: печатает приглашение и блокируется
/// до конца строки на stdin. Содержимое строки отбрасывается;
/// конец ввода (EOF) тоже считается подтверждением, чтобы игра
/// с перенаправлённым вводом доигрывалась до конца.
pub struct ConsolePrompt {
    prompt: String,
}

impl ConsolePrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl TurnGate for ConsolePrompt {
    fn wait_for_ack(&mut self) {
        print!("{}", self.prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}
