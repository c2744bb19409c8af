//! Движок пошаговой карточной игры со взятием карт из общей колоды.
//!
//! Игроки по очереди тянут по одной карте за раунд; очки карты —
//! произведение значений масти и ранга. После каждого раунда и в
//! конце партии движок строит таблицу мест с честной обработкой
//! ничьих на любой позиции.
//!
//! Слои:
//!   - `domain` – карты, колода, игроки, состав партии;
//!   - `engine` – таблица мест и оркестрация раундов/ходов;
//!   - `infra` – RNG, каталог сообщений, консольный ввод/вывод.

pub mod domain;
pub mod engine;
pub mod infra;
