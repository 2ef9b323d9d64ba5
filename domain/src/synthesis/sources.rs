//! Topic → display source reshaping.

use super::text::clean_text;
use crate::chat::entities::Source;
use crate::search::entities::Topic;
use crate::util::truncate_chars;

/// Maximum characters of snippet text used as a source title
pub const TITLE_CHARS: usize = 80;

/// Reshape flattened topics into the `{title, url, snippet}` form sent to clients.
///
/// The title is the start of the cleaned snippet, or the URL when the
/// snippet cleans down to nothing.
pub fn to_sources(topics: &[Topic]) -> Vec<Source> {
    topics.iter().map(to_source).collect()
}

fn to_source(topic: &Topic) -> Source {
    let snippet = clean_text(&topic.text);
    let title = if snippet.is_empty() {
        topic.first_url.clone()
    } else {
        truncate_chars(&snippet, TITLE_CHARS).to_string()
    };

    Source {
        title,
        url: topic.first_url.clone(),
        snippet,
    }
}
