//! Line format of a history record: `<type_tag>:<base64(payload)>`.
//!
//! The payload uses the standard, padded base64 alphabet. Decoding tolerates
//! non-zero trailing bits, so hand-edited records such as `YR==` still load.
//! The tag is written
//! verbatim, so a tag containing `:` does not survive a round trip: decoding
//! splits on the first `:` only.

use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use clip_core::ClipEntry;
use thiserror::Error;

const SEPARATOR: char = ':';

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record has no `:` separator")]
    MissingSeparator,

    #[error("record payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Encode an entry as a single record line, without the line terminator.
pub fn encode(entry: &ClipEntry) -> String {
    let tag = entry.type_tag().as_str();
    let mut line = String::with_capacity(tag.len() + 1 + entry.size_bytes().div_ceil(3) * 4);
    line.push_str(tag);
    line.push(SEPARATOR);
    PAYLOAD_ENGINE.encode_string(entry.payload(), &mut line);
    line
}

/// Decode a record line, reporting why it was rejected.
pub fn try_decode(line: &str) -> Result<ClipEntry, DecodeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (type_tag, encoded) = line
        .split_once(SEPARATOR)
        .ok_or(DecodeError::MissingSeparator)?;
    let payload = PAYLOAD_ENGINE.decode(encoded)?;
    Ok(ClipEntry::new(type_tag, payload))
}

/// Decode a record line; malformed records yield `None`.
pub fn decode(line: &str) -> Option<ClipEntry> {
    try_decode(line).ok()
}
