//! Fixed messages the chat client shows without asking the server.

use super::entities::Message;
use crate::locale::Locale;

/// Id of the greeting every fresh session starts with
pub const INTRO_MESSAGE_ID: &str = "intro";

/// Greeting shown as the first assistant message of a fresh session.
pub fn intro_message(locale: Locale) -> Message {
    let (content, thoughts): (&str, [&str; 3]) = match locale {
        Locale::En => (
            "Hi! I'm DeepThink, an agentic chat. I show explicit reasoning steps, \
             search the web on the fly and write answers in a lively style. \
             Ask me anything and watch the process.",
            [
                "Preparing the interface surface",
                "Activating the search and summarization pipeline",
                "Waiting for a user prompt",
            ],
        ),
        Locale::Ru => (
            "Привет! Я DeepThink — агентный чат с интерфейсом и ощущением ChatGPT. \
             Я делюсь явными шагами рассуждений, подключаюсь к веб-поиску на лету \
             и формирую ответы в живом стиле. Спроси что угодно и наблюдай за процессом.",
            [
                "Готовлю рабочую поверхность интерфейса",
                "Активация пайплайна поиска и резюмирования",
                "Ожидаю пользовательский запрос",
            ],
        ),
    };

    Message::assistant(content)
        .with_id(INTRO_MESSAGE_ID)
        .with_thoughts(thoughts.iter().map(|t| t.to_string()).collect())
}

/// Content of the placeholder shown while a reply is in flight.
pub fn thinking_placeholder(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Entering deep thinking mode...",
        Locale::Ru => "Вхожу в глубинный режим размышлений...",
    }
}

/// Assistant message used when a turn fails on the client side.
///
/// The attached thoughts are part of the same canned narrative as
/// [`CannedThoughts`](crate::synthesis::CannedThoughts); they describe
/// nothing about the real failure.
pub fn fallback_message(locale: Locale) -> Message {
    let content = match locale {
        Locale::En => {
            "Looks like there was a problem reaching web search. \
             Try again or rephrase your request."
        }
        Locale::Ru => {
            "Кажется, возникла проблема с доступом к веб-поиску. \
             Попробуй ещё раз или измени формулировку запроса."
        }
    };

    Message::assistant(content).with_thoughts(crate::synthesis::CannedThoughts::for_failure(locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::entities::Role;

    #[test]
    fn test_intro_message_shape() {
        let intro = intro_message(Locale::En);
        assert_eq!(intro.id, INTRO_MESSAGE_ID);
        assert_eq!(intro.role, Role::Assistant);
        assert!(intro.content.contains("DeepThink"));
        assert_eq!(intro.thoughts.as_ref().map(Vec::len), Some(3));
        assert!(intro.sources.is_none());
    }

    #[test]
    fn test_fallback_message_has_failure_thoughts() {
        let fallback = fallback_message(Locale::En);
        assert_eq!(fallback.role, Role::Assistant);
        assert!(fallback.content.contains("web search"));
        assert_eq!(fallback.thoughts.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_russian_strings() {
        assert!(intro_message(Locale::Ru).content.starts_with("Привет"));
        assert!(thinking_placeholder(Locale::Ru).starts_with("Вхожу"));
    }
}
