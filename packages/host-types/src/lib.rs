//! Leaf types shared by the host stores and the light client verifiers:
//! heights, identifiers, commitment digests, canonical store paths, and the
//! type-tagged payload envelope.

pub mod commitment;
pub mod envelope;
pub mod error;
pub mod height;
pub mod identifiers;
pub mod path;

/// Ensure that a condition is true, otherwise return an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
