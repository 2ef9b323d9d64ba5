//! Search domain.
//!
//! - [`entities::InstantAnswer`]: the upstream response, with [`entities::RelatedTopic`]
//!   as a two-case leaf/group variant
//! - [`flatten::flatten_topics`]: explicit traversal into a capped, ordered topic list
//! - [`query::SearchQuery`]: outbound query parameters

pub mod entities;
pub mod flatten;
pub mod query;
