//! Chat transport adapters.

mod http;

pub use http::{CHAT_PATH, HttpChatTransport};
