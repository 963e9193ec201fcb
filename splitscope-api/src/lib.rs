//! splitscope-api: Splitwise REST client and wire-format parsing.

pub mod client;
pub mod wire;

pub use client::{DEFAULT_BASE_URL, SplitwiseClient};
pub use wire::WireGroup;
