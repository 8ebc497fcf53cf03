//! Text envelopes around binary ASN.1 data.
//!
//! Encoded structures usually travel as PEM armor (RFC 7468), but hex dumps
//! and bare base64 are common too. [`unarmor`] detects which of these an
//! input uses and returns the binary payload.

pub mod envelope;
pub mod error;
pub mod hex;
pub mod pem;

pub use envelope::{Envelope, decode_base64, unarmor};
pub use hex::decode_hex;
pub use pem::{Label, Pem, parse_many};
