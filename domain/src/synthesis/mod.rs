//! Reply synthesis.
//!
//! Pure functions from a query and its flattened topics to the pieces of a
//! [`ChatReply`](crate::chat::exchange::ChatReply):
//!
//! - [`answer::craft_answer`]: templated reply text
//! - [`thoughts::CannedThoughts`]: canned narrative strings (not reasoning)
//! - [`sources::to_sources`]: `{title, url, snippet}` reshaping
//! - [`text::clean_text`]: whitespace normalization

pub mod answer;
pub mod sources;
pub mod text;
pub mod thoughts;

pub use answer::craft_answer;
pub use sources::to_sources;
pub use text::clean_text;
pub use thoughts::CannedThoughts;

use crate::chat::exchange::ChatReply;
use crate::locale::Locale;
use crate::search::entities::Topic;

/// Assemble the full reply for `query` from its flattened topics.
pub fn synthesize_reply(query: &str, topics: &[Topic], locale: Locale) -> ChatReply {
    ChatReply {
        reply: craft_answer(query, topics, locale),
        thoughts: CannedThoughts::for_search(query, topics, locale),
        sources: to_sources(topics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_reply_weather_scenario() {
        let topics = vec![Topic::new("Weather is...", "https://x")];
        let reply = synthesize_reply("weather", &topics, Locale::En);

        assert_eq!(reply.sources.len(), 1);
        assert_eq!(reply.sources[0].title, "Weather is...");
        assert!(reply.reply.contains("1. Weather is..."));
        assert!(!reply.reply.contains("2. "));
        assert_eq!(reply.thoughts.len(), 4);
    }

    #[test]
    fn test_synthesize_reply_empty() {
        let reply = synthesize_reply("zzz", &[], Locale::En);
        assert!(reply.sources.is_empty());
        assert!(reply.reply.contains("«zzz»"));
        assert_eq!(reply.thoughts.len(), 3);
    }
}
