//! # tlvscope
//!
//! Core traits shared by the tlvscope crates.
//!
//! ## Overview
//!
//! Input travels through a chain of conversions before it becomes a tree:
//! ```text
//! text (PEM / hex / base64) → Vec<u8> → Node
//! ```
//!
//! Every step is a `Decoder` implementation. The `armor` crate turns text
//! envelopes into bytes and the `ber` crate turns bytes into a tree of
//! TLV nodes.
//!
//! ## Type Safety
//!
//! The `DecodableFrom` marker trait restricts which conversions exist, so an
//! impossible conversion is a compile error rather than a runtime failure.
//!
//! ## Example
//!
//! ```ignore
//! use tlvscope::decoder::Decoder;
//! use ber::Node;
//! use armor::Pem;
//!
//! let pem: Pem = text.parse()?;
//! let bytes: Vec<u8> = pem.decode()?;
//! let node: Node = bytes.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
