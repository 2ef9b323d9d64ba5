//! Instant-answer response model.
//!
//! Mirrors the subset of the DuckDuckGo Instant Answer JSON that the reply
//! synthesizer reads. Unknown fields are ignored and every field is optional,
//! since the upstream omits or nulls them freely.

use serde::{Deserialize, Deserializer, Serialize};

/// A single search result unit: display text plus a link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "Text", default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(rename = "FirstURL", default, deserialize_with = "null_as_default")]
    pub first_url: String,
}

impl Topic {
    pub fn new(text: impl Into<String>, first_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            first_url: first_url.into(),
        }
    }

    /// A topic is usable only when it has both text and a URL
    pub fn is_usable(&self) -> bool {
        !self.text.is_empty() && !self.first_url.is_empty()
    }
}

/// One entry of `RelatedTopics`: either a topic or a named group of topics.
///
/// Groups are assumed to hold leaf topics only (one level of nesting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedTopic {
    // Must stay first: a `Leaf` accepts any object, a `Group` needs `Topics`.
    Group {
        #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(rename = "Topics")]
        topics: Vec<Topic>,
    },
    Leaf(Topic),
}

impl RelatedTopic {
    /// The topics carried by this entry, in order
    pub fn leaves(&self) -> &[Topic] {
        match self {
            RelatedTopic::Group { topics, .. } => topics,
            RelatedTopic::Leaf(topic) => std::slice::from_ref(topic),
        }
    }
}

/// Top-level instant-answer response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantAnswer {
    #[serde(rename = "Abstract", default, deserialize_with = "null_as_default")]
    pub abstract_text: String,
    #[serde(rename = "AbstractURL", default, deserialize_with = "null_as_default")]
    pub abstract_url: String,
    #[serde(rename = "Heading", default, deserialize_with = "null_as_default")]
    pub heading: String,
    #[serde(rename = "RelatedTopics", default, deserialize_with = "null_as_default")]
    pub related_topics: Vec<RelatedTopic>,
}

impl InstantAnswer {
    /// The abstract as a topic, when both its text and URL are present
    pub fn abstract_topic(&self) -> Option<Topic> {
        let topic = Topic::new(self.abstract_text.clone(), self.abstract_url.clone());
        topic.is_usable().then_some(topic)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_and_nested_topics() {
        let json = serde_json::json!({
            "Abstract": "",
            "AbstractURL": "",
            "Heading": "Rust",
            "RelatedTopics": [
                {"Text": "Rust language", "FirstURL": "https://a", "Result": "<a>..</a>"},
                {"Name": "Games", "Topics": [
                    {"Text": "Rust (video game)", "FirstURL": "https://b"}
                ]}
            ]
        });

        let answer: InstantAnswer = serde_json::from_value(json).unwrap();
        assert_eq!(answer.heading, "Rust");
        assert_eq!(answer.related_topics.len(), 2);
        assert!(matches!(answer.related_topics[0], RelatedTopic::Leaf(_)));
        match &answer.related_topics[1] {
            RelatedTopic::Group { name, topics } => {
                assert_eq!(name, "Games");
                assert_eq!(topics[0].first_url, "https://b");
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let answer: InstantAnswer = serde_json::from_str(
            r#"{"Abstract": null, "RelatedTopics": [{"FirstURL": "https://x"}]}"#,
        )
        .unwrap();
        assert!(answer.abstract_text.is_empty());
        assert!(answer.abstract_url.is_empty());
        assert_eq!(
            answer.related_topics,
            vec![RelatedTopic::Leaf(Topic::new("", "https://x"))]
        );
    }

    #[test]
    fn test_empty_object_parses() {
        let answer: InstantAnswer = serde_json::from_str("{}").unwrap();
        assert_eq!(answer, InstantAnswer::default());
    }

    #[test]
    fn test_abstract_topic_requires_both_fields() {
        let mut answer = InstantAnswer {
            abstract_text: "Weather is...".to_string(),
            ..Default::default()
        };
        assert!(answer.abstract_topic().is_none());

        answer.abstract_url = "https://x".to_string();
        assert_eq!(
            answer.abstract_topic(),
            Some(Topic::new("Weather is...", "https://x"))
        );
    }

    #[test]
    fn test_leaves_of_group_and_leaf() {
        let leaf = RelatedTopic::Leaf(Topic::new("a", "https://a"));
        assert_eq!(leaf.leaves().len(), 1);

        let group = RelatedTopic::Group {
            name: "g".to_string(),
            topics: vec![Topic::new("b", "https://b"), Topic::new("c", "https://c")],
        };
        assert_eq!(group.leaves().len(), 2);
    }
}
