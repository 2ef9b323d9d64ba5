//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod chat_transport;
pub mod search_gateway;
pub mod session_store;
pub mod turn_observer;
