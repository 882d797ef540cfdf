//! A mock implementation of the light client verifier contract.
//!
//! The mock accepts every consensus-specific check while still enforcing the
//! generic contract obligations: type-tag discipline, unset-height and
//! zero-timestamp rejection, duplicate-height detection, and freezing on
//! conflicting headers. It carries no security weight and exists so hosts
//! and protocol layers can be exercised without a real consensus engine.

pub mod client;
pub mod client_state;
pub mod consensus_state;
pub mod header;
pub mod proof;

pub use client::{MockClient, MOCK_CLIENT_TYPE};
