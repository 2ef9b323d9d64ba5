//! Progress indicators

pub mod thinking;

pub use thinking::ThinkingIndicator;
