use armor::Envelope;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum InputFormat {
    /// Detect PEM, hex or base64 text, otherwise raw bytes
    Auto,
    /// Raw BER/DER bytes
    Der,
    /// PEM armor; every block is decoded and concatenated
    Pem,
    /// Hex digits, whitespace or ':' separated
    Hex,
    /// Bare base64 text
    Base64,
}

impl InputFormat {
    fn envelope(self, input: &[u8]) -> Envelope {
        match self {
            InputFormat::Auto => Envelope::detect(input),
            InputFormat::Der => Envelope::Binary,
            InputFormat::Pem => Envelope::Pem,
            InputFormat::Hex => Envelope::Hex,
            InputFormat::Base64 => Envelope::Base64,
        }
    }

    /// Strips the text envelope, if any, and returns the binary payload.
    pub(crate) fn extract(self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(self.envelope(input).extract(input)?)
    }
}
