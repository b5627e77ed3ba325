//! # Encoded Bytes
//!
//! An opaque byte sequence whose textual form is always base64url.
//!
//! [`EncodedBytes`] holds raw, unencoded bytes. The representation it takes
//! on the wire depends on who asks:
//!
//! | Boundary                        | Representation                     |
//! |:--------------------------------|:-----------------------------------|
//! | JSON and other text formats     | base64url string (map keys too)    |
//! | Binary serde formats (CBOR, …)  | the format's native byte string    |
//! | URL path pieces                 | base64url text via [`Display`]     |
//! | HTTP header values              | base64url bytes                    |
//!
//! The alphabet is RFC 4648 §5 (`A-Z a-z 0-9 - _`) without `=` padding.
//! Every character of it is ASCII, so the encoded form is valid UTF-8 and
//! a valid header value by construction.
//!
//! ## Features
//!
//! Each adapter is gated behind a feature and depends only on the core type
//! plus one external framework:
//!
//! - `serde` (default): [`Serialize`](serde::Serialize) and
//!   [`Deserialize`](serde::Deserialize), plus the [`serde_b64`] field
//!   adapter for `Vec<u8>`.
//! - `http` (default): conversions to and from `http::HeaderValue`.
//! - `proptest`: a `proptest::arbitrary::Arbitrary` implementation.
//! - `arbitrary`: an `arbitrary::Arbitrary` implementation for fuzzing.
//!
//! [`Display`]: std::fmt::Display

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use base64ct::{Base64UrlUnpadded, Encoding};
use thiserror::Error;

#[cfg(feature = "arbitrary")]
mod fuzz;
#[cfg(feature = "http")]
mod header;
#[cfg(feature = "proptest")]
mod strategy;
#[cfg(feature = "serde")]
pub mod serde_b64;

// ============================================================================
// EncodedBytes
// ============================================================================

/// Raw bytes that render as base64url text at textual boundaries.
///
/// The wrapped bytes are never stored encoded. Every textual rendering
/// encodes afresh from the raw bytes.
///
/// Equality, ordering and hashing are those of the raw byte sequence.
/// Concatenation ([`concat`](Self::concat), `+`) forms a monoid whose
/// identity is [`EncodedBytes::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedBytes(Vec<u8>);

impl EncodedBytes {
    /// Wrap raw bytes. Any byte sequence is accepted.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwrap into the raw bytes originally passed to [`new`](Self::new).
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Number of raw bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the raw byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as a base64url-unpadded string.
    ///
    /// The output contains only ASCII characters from `A-Z a-z 0-9 - _`.
    pub fn encoded_form(&self) -> String {
        Base64UrlUnpadded::encode_string(&self.0)
    }

    /// Length in bytes of [`encoded_form`](Self::encoded_form), computed
    /// without encoding.
    pub fn encoded_len(&self) -> usize {
        Base64UrlUnpadded::encoded_len(&self.0)
    }

    /// Decode base64url-unpadded text into its raw bytes.
    pub fn decode(encoded: &str) -> Result<Self, Error> {
        match Base64UrlUnpadded::decode_vec(encoded) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(err) => {
                let err = Error::from(err);
                tracing::debug!(%err, len = encoded.len(), "rejected base64url input");
                Err(err)
            },
        }
    }

    /// Concatenate two values, `self` first.
    pub fn concat(&self, other: &Self) -> Self {
        let mut bytes = Vec::with_capacity(self.0.len() + other.0.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(&other.0);
        Self(bytes)
    }
}

/// Display as the base64url-unpadded encoded form.
///
/// This is also the URL path piece representation.
impl fmt::Display for EncodedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded_form())
    }
}

/// Parse from base64url-unpadded text, e.g. a URL path piece.
impl FromStr for EncodedBytes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl AsRef<[u8]> for EncodedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for EncodedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for EncodedBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for EncodedBytes {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Wrap the UTF-8 bytes of a string. The string is not decoded.
impl From<&str> for EncodedBytes {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<EncodedBytes> for Vec<u8> {
    fn from(value: EncodedBytes) -> Self {
        value.0
    }
}

// ============================================================================
// Concatenation
// ============================================================================

impl Add for EncodedBytes {
    type Output = EncodedBytes;

    fn add(mut self, rhs: EncodedBytes) -> Self::Output {
        self.0.extend_from_slice(&rhs.0);
        self
    }
}

impl Add<&EncodedBytes> for &EncodedBytes {
    type Output = EncodedBytes;

    fn add(self, rhs: &EncodedBytes) -> Self::Output {
        self.concat(rhs)
    }
}

/// Concatenate every value in order; an empty iterator yields the identity.
impl FromIterator<EncodedBytes> for EncodedBytes {
    fn from_iter<I: IntoIterator<Item = EncodedBytes>>(iter: I) -> Self {
        Self(iter.into_iter().flat_map(|v| v.0).collect())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors produced when decoding base64url text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside the base64url alphabet, or non-canonical
    /// trailing bits.
    #[error("invalid base64url encoding")]
    InvalidEncoding,
    /// The input length cannot be produced by unpadded base64url.
    #[error("invalid base64url length")]
    InvalidLength,
}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Self {
        match err {
            base64ct::Error::InvalidLength => Error::InvalidLength,
            _ => Error::InvalidEncoding,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
