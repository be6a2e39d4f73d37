//! Byte-sequence codec: base64 / base64url / hex strings, tagged raw bytes.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

use crate::config::ByteArrayMode;
use crate::error::{Error, ValueKind};
use crate::format::{Format, cbor};

// -----------------------------------------------------------------------------
// Mode helpers

/// Encodes raw bytes as a string per `mode`.
pub(crate) fn encode_string(data: &[u8], mode: ByteArrayMode) -> String {
    match mode {
        ByteArrayMode::Base64 => STANDARD.encode(data),
        ByteArrayMode::Base64url => URL_SAFE_NO_PAD.encode(data),
        ByteArrayMode::Hex => hex::encode(data),
    }
}

/// Decodes a string back to raw bytes per `mode`; `None` on malformed input.
pub(crate) fn decode_string(text: &str, mode: ByteArrayMode) -> Option<Vec<u8>> {
    match mode {
        ByteArrayMode::Base64 => STANDARD.decode(text).ok(),
        ByteArrayMode::Base64url => URL_SAFE_NO_PAD.decode(text).ok(),
        ByteArrayMode::Hex => hex::decode(text).ok(),
    }
}

/// Returns the expected-conversion tag announcing `mode` in the binary
/// representation.
pub(crate) const fn tag_for(mode: ByteArrayMode) -> u64 {
    match mode {
        ByteArrayMode::Base64 => cbor::TAG_EXPECTED_BASE64,
        ByteArrayMode::Base64url => cbor::TAG_EXPECTED_BASE64URL,
        ByteArrayMode::Hex => cbor::TAG_EXPECTED_BASE16,
    }
}

// -----------------------------------------------------------------------------
// Encode / Decode

/// Encodes a byte sequence: an encoded string in the textual
/// representation, tagged raw bytes in the binary one.
pub(crate) fn encode<F: Format>(data: &[u8], mode: ByteArrayMode) -> F::Value {
    match F::bytes(data.to_vec()) {
        Some(raw) => F::tagged(tag_for(mode), raw),
        None => F::string(encode_string(data, mode)),
    }
}

/// Decodes a byte sequence.
///
/// The binary representation accepts a byte string with or without its
/// expected-conversion tag; the tag is advisory. The textual representation
/// accepts a string decodable per `mode`. Everything else fails with
/// [`Error::InvalidValueType`].
pub(crate) fn decode<F: Format>(value: &F::Value, mode: ByteArrayMode) -> Result<Vec<u8>, Error> {
    if F::BINARY {
        return F::as_bytes(F::untagged(value))
            .map(<[u8]>::to_vec)
            .ok_or_else(|| Error::InvalidValueType {
                actual: F::kind_of(value),
                expected: &[ValueKind::Bytes],
            });
    }

    let text = F::as_str(value).ok_or_else(|| Error::InvalidValueType {
        actual: F::kind_of(value),
        expected: &[ValueKind::String],
    })?;
    decode_string(text, mode).ok_or(Error::InvalidValueType {
        actual: ValueKind::String,
        expected: &[ValueKind::Bytes],
    })
}

// -----------------------------------------------------------------------------
// Tests
