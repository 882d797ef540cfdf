//! The host side of the cross-chain trust core: the [`client::LightClient`]
//! verifier contract, the [`router::ClientRouter`] that dispatches to it, and
//! the commitment, sequence and capability stores every higher protocol
//! layer reads and writes.
//!
//! Execution is single-threaded and synchronous; each entry point runs to
//! completion, and a failure aborts it before any state is mutated.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod router;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use client::LightClient;
pub use error::HostError;
pub use host::Host;
