use std::fmt::{Display, Formatter};

use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use tlvscope::decoder::Decoder;

use crate::error::Error;
use crate::hex::decode_hex;
use crate::pem::parse_many;

/// How binary data is wrapped in an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// One or more `-----BEGIN ...-----` blocks.
    Pem,
    /// Hex digits, optionally separated by whitespace or `:`.
    Hex,
    /// Bare base64 text.
    Base64,
    /// The bytes themselves.
    Binary,
}

impl Display for Envelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Envelope::Pem => "pem",
            Envelope::Hex => "hex",
            Envelope::Base64 => "base64",
            Envelope::Binary => "binary",
        };
        write!(f, "{name}")
    }
}

impl Envelope {
    /// Guesses the envelope: PEM armor first, then hex, then base64.
    /// Anything else, including non-UTF-8 input, is binary.
    pub fn detect(input: &[u8]) -> Envelope {
        let Ok(text) = std::str::from_utf8(input) else {
            return Envelope::Binary;
        };
        let envelope = if text.contains("-----BEGIN ") {
            Envelope::Pem
        } else if decode_hex(text).is_ok() {
            Envelope::Hex
        } else if decode_base64(text).is_ok() {
            Envelope::Base64
        } else {
            Envelope::Binary
        };
        debug!("detected {envelope} input");
        envelope
    }

    /// Returns the binary payload wrapped by this envelope. PEM payloads of
    /// several blocks are concatenated in order.
    pub fn extract(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        if *self == Envelope::Binary {
            return Ok(input.to_vec());
        }
        let text = std::str::from_utf8(input).map_err(|_| Error::NotText)?;
        match self {
            Envelope::Pem => {
                let mut payload = Vec::new();
                for pem in parse_many(text)? {
                    let bytes: Vec<u8> = pem.decode()?;
                    payload.extend(bytes);
                }
                Ok(payload)
            }
            Envelope::Hex => decode_hex(text),
            Envelope::Base64 => decode_base64(text),
            Envelope::Binary => Ok(input.to_vec()),
        }
    }
}

/// Decodes base64 text, ignoring whitespace and line breaks.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, Error> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(Error::Empty);
    }
    STANDARD.decode(compact).map_err(Error::Base64Decode)
}

/// Detects the envelope of `input` and returns it with the payload.
pub fn unarmor(input: &[u8]) -> Result<(Envelope, Vec<u8>), Error> {
    let envelope = Envelope::detect(input);
    let payload = envelope.extract(input)?;
    Ok((envelope, payload))
}
