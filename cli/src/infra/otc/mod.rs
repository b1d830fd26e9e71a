//! Open Telekom Cloud ECS adapter.

pub mod client;
pub mod signer;
pub mod wire;

pub use client::OtcEcsClient;
