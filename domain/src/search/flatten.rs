//! Flattening of an instant-answer response into an ordered source list.

use super::entities::{InstantAnswer, Topic};

/// Upper bound on the number of topics kept from one response
pub const MAX_SOURCES: usize = 6;

/// Flatten an instant answer into at most [`MAX_SOURCES`] usable topics.
///
/// The abstract comes first (when it has both text and URL), followed by
/// related topics in order of appearance, with groups expanded in place.
/// Topics missing text or URL are dropped.
pub fn flatten_topics(answer: &InstantAnswer) -> Vec<Topic> {
    answer
        .abstract_topic()
        .into_iter()
        .chain(
            answer
                .related_topics
                .iter()
                .flat_map(|entry| entry.leaves().iter().cloned()),
        )
        .filter(Topic::is_usable)
        .take(MAX_SOURCES)
        .collect()
}
