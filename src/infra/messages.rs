use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;

use crate::engine::{GameEvent, RandomSource};

/// Категории, для которых каталог обязан содержать хотя бы один
/// шаблон. `FINAL STANDINGS` сюда не входит: таблица мест приходит
/// уже отрисованной и печатается как есть.
const REQUIRED_CATEGORIES: [&str; 10] = [
    "WELCOME",
    "ROUND START",
    "ROUND END",
    "ROUND END TIE",
    "TURN START",
    "TRUE TURN END",
    "FALSE TURN END",
    "EMPTY DECK",
    "GAME OVER",
    "GAME OVER TIE",
];

/// Ошибки загрузки каталога сообщений.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("could not parse messages catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("messages catalog has no templates for category '{0}'")]
    MissingCategory(&'static str),
}

/// Каталог шаблонов сообщений: категория события → варианты
/// формулировки. Вариант выбирается через `RandomSource`,
/// плейсхолдеры вида `$current_round` заменяются именованными
/// полями события.
#[derive(Clone, Debug)]
pub struct MessageCatalog {
    templates: HashMap<String, Vec<String>>,
}

impl MessageCatalog {
    /// Встроенный каталог со штатными формулировками.
    pub fn builtin() -> Result<Self, MessageError> {
        Self::from_json(include_str!("messages.json"))
    }

    /// Каталог из JSON-объекта вида `{"КАТЕГОРИЯ": ["вариант", ...]}`.
    /// Каждая обязательная категория должна иметь хотя бы один
    /// вариант, иначе загрузка отклоняется целиком.
    pub fn from_json(source: &str) -> Result<Self, MessageError> {
        let templates: HashMap<String, Vec<String>> = serde_json::from_str(source)?;
        for category in REQUIRED_CATEGORIES {
            match templates.get(category) {
                Some(variants) if !variants.is_empty() => {}
                _ => return Err(MessageError::MissingCategory(category)),
            }
        }
        Ok(Self { templates })
    }

    /// Отрисовать событие: выбрать вариант шаблона и подставить поля.
    ///
    /// Финальная таблица проходит насквозь без шаблона. Отсутствие
    /// категории после валидации невозможно; на всякий случай вместо
    /// паники возвращается имя категории с предупреждением в лог.
    pub fn render<R: RandomSource>(&self, rng: &mut R, event: &GameEvent) -> String {
        if let GameEvent::FinalStandings { leaderboard } = event {
            return leaderboard.clone();
        }
        let category = event.category();
        let Some(variants) = self.templates.get(category).filter(|v| !v.is_empty()) else {
            warn!(category, "no templates for event category");
            return category.to_string();
        };
        let template = &variants[rng.pick(variants.len())];
        substitute(template, &event.fields())
    }
}

/// Подстановка `$key` → значение для каждого именованного поля.
fn substitute(template: &str, fields: &[(&'static str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in fields {
        out = out.replace(&format!("${key}"), value);
    }
    out
}
