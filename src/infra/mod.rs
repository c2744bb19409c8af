//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - каталог шаблонов сообщений;
//! - консольные приёмник событий и барьер хода.

pub mod console;
pub mod messages;
pub mod rng;

pub use console::{ConsolePrompt, ConsoleSink};
pub use messages::{MessageCatalog, MessageError};
pub use rng::{DeterministicRng, SystemRng};
