//! Canned "thought" strings shown next to replies.
//!
//! These are a fixed narrative template filled in with the query and the
//! number of sources. They are not a trace of any reasoning process and
//! nothing in the reply depends on them.

use super::text::clean_text;
use crate::locale::Locale;
use crate::search::entities::Topic;
use crate::util::truncate_chars;

/// Maximum characters of the top snippet quoted in a thought
pub const EXCERPT_CHARS: usize = 120;

/// Canned narrative template for the "deliberation trace".
pub struct CannedThoughts;

impl CannedThoughts {
    /// Thoughts attached to a successful reply. Always 3 or 4 entries.
    pub fn for_search(query: &str, topics: &[Topic], locale: Locale) -> Vec<String> {
        let mut thoughts = Vec::with_capacity(4);

        thoughts.push(match locale {
            Locale::En => format!("Formulating search strategies for «{query}»."),
            Locale::Ru => format!("Формулирую стратегии поиска для запроса: «{query}»."),
        });

        match topics.first() {
            Some(top) => {
                let count = topics.len();
                let excerpt = clean_text(&top.text);
                let excerpt = truncate_chars(&excerpt, EXCERPT_CHARS);
                match locale {
                    Locale::En => {
                        thoughts.push(format!(
                            "Found {count} relevant sources, starting signal aggregation."
                        ));
                        thoughts.push(format!("Extracting key facts from: {excerpt}…"));
                    }
                    Locale::Ru => {
                        thoughts.push(format!(
                            "Нахожу {count} релевантных источников, запускаю агрегацию сигналов."
                        ));
                        thoughts.push(format!("Извлекаю ключевые факты из: {excerpt}…"));
                    }
                }
            }
            None => thoughts.push(
                match locale {
                    Locale::En => "No direct facts found, building the answer from base knowledge.",
                    Locale::Ru => "Прямые факты не найдены, строю ответ из базовых знаний.",
                }
                .to_string(),
            ),
        }

        thoughts.push(
            match locale {
                Locale::En => "Assembling a summary and wiring in source links.",
                Locale::Ru => "Собираю конспект и вшиваю ссылки на источники.",
            }
            .to_string(),
        );

        thoughts
    }

    /// Thoughts attached to the client-side fallback message of a failed turn.
    pub fn for_failure(locale: Locale) -> Vec<String> {
        let lines: [&str; 3] = match locale {
            Locale::En => [
                "Checking the network connection",
                "Receiving an error from the external API",
                "Notifying the user about the failure",
            ],
            Locale::Ru => [
                "Проверяю сетевое соединение",
                "Получаю ошибку от внешнего API",
                "Отправляю пользователю уведомление о сбое",
            ],
        };
        lines.iter().map(|l| l.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thoughts_with_sources() {
        let topics = vec![
            Topic::new("Rust   is a language", "https://a"),
            Topic::new("Cargo", "https://b"),
        ];
        let thoughts = CannedThoughts::for_search("rust", &topics, Locale::En);
        assert_eq!(thoughts.len(), 4);
        assert!(thoughts[0].contains("«rust»"));
        assert!(thoughts[1].contains("Found 2 relevant sources"));
        assert_eq!(thoughts[2], "Extracting key facts from: Rust is a language…");
    }

    #[test]
    fn test_thoughts_without_sources() {
        let thoughts = CannedThoughts::for_search("nothing", &[], Locale::En);
        assert_eq!(thoughts.len(), 3);
        assert!(thoughts[1].starts_with("No direct facts found"));
    }

    #[test]
    fn test_excerpt_truncated() {
        let topics = vec![Topic::new("x".repeat(300), "https://x")];
        let thoughts = CannedThoughts::for_search("q", &topics, Locale::En);
        let excerpt = thoughts[2]
            .trim_start_matches("Extracting key facts from: ")
            .trim_end_matches('…');
        assert_eq!(excerpt.chars().count(), EXCERPT_CHARS);
    }

    #[test]
    fn test_failure_thoughts() {
        assert_eq!(CannedThoughts::for_failure(Locale::En).len(), 3);
        assert_eq!(
            CannedThoughts::for_failure(Locale::Ru)[0],
            "Проверяю сетевое соединение"
        );
    }
}
