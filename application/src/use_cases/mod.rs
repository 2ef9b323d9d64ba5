//! Use cases (application services)
//!
//! - [`answer_query`]: server side: conversation in, templated reply out
//! - [`chat_turn`]: client side: the chat state machine over a persisted session

pub mod answer_query;
pub mod chat_turn;
