//! The type-tagged payload envelope.
//!
//! Every client-type-specific payload crossing the host boundary travels as a
//! `google.protobuf.Any`: a canonical type URL plus opaque bytes. The host
//! never interprets the bytes, only the tag, and implementations check the
//! tag *before* attempting a typed decode so garbage payloads never reach
//! type-specific decode logic.

use ibc_proto::google::protobuf::Any;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ensure;
use crate::error::TypeError;

/// Wraps a payload under its canonical type URL.
///
/// The payload body is JSON, as in the wasm client wrappers.
///
/// # Errors
/// Returns an error if the payload cannot be serialized.
pub fn pack<T: Serialize>(type_url: &str, payload: &T) -> Result<Any, TypeError> {
    let value = serde_json::to_vec(payload).map_err(|err| TypeError::PayloadEncode {
        type_url: type_url.to_string(),
        reason: err.to_string(),
    })?;
    Ok(Any {
        type_url: type_url.to_string(),
        value,
    })
}

/// Unwraps a payload, checking the tag first.
///
/// # Errors
/// Returns [`TypeError::UnexpectedTypeUrl`] on a tag mismatch, without
/// touching the payload bytes, and [`TypeError::PayloadDecode`] if the
/// matching payload fails to deserialize.
pub fn unpack<T: DeserializeOwned>(any: &Any, expected_type_url: &str) -> Result<T, TypeError> {
    ensure!(
        any.type_url == expected_type_url,
        TypeError::UnexpectedTypeUrl {
            expected: expected_type_url.to_string(),
            found: any.type_url.clone(),
        }
    );
    serde_json::from_slice(&any.value).map_err(|err| TypeError::PayloadDecode {
        type_url: any.type_url.clone(),
        reason: err.to_string(),
    })
}
