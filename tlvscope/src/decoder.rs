//! Decoder trait for type-safe conversions.
//!
//! `Decoder<T, D>` converts a source `T` into a destination `D`. The
//! destination has to opt in through `DecodableFrom<T>`, which keeps the
//! set of conversions explicit.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use tlvscope::decoder::{Decoder, DecodableFrom};
//!
//! struct Armored(String);
//! struct Payload(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Armored> for Payload {}
//!
//! impl Decoder<Armored, Payload> for Armored {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Payload, Self::Error> {
//!         Ok(Payload(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into `D`.
///
/// # Examples
///
/// ```ignore
/// use tlvscope::decoder::Decoder;
/// use ber::Node;
///
/// let bytes = vec![0x30, 0x00];
/// let node: Node = bytes.decode().unwrap();
/// assert_eq!(node.children().map(|c| c.len()), Some(0));
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for every destination type that a
/// `Decoder` implementation produces:
///
/// ```no_run
/// use tlvscope::decoder::DecodableFrom;
///
/// struct Source;
/// struct Destination;
///
/// impl DecodableFrom<Source> for Destination {}
/// ```
pub trait DecodableFrom<T> {}
