//! HTTP header conversions.
//!
//! Header values carry the base64url-unpadded text as bytes. Malformed
//! client input surfaces as [`Error`], never a panic, so request handlers
//! can answer with a client error.

use http::HeaderValue;
use http::header::InvalidHeaderValue;

use crate::{EncodedBytes, Error};

/// Encode as a header value.
///
/// The base64url alphabet is visible ASCII, so this only fails if
/// `HeaderValue` itself rejects the input.
impl TryFrom<&EncodedBytes> for HeaderValue {
    type Error = InvalidHeaderValue;

    fn try_from(value: &EncodedBytes) -> Result<Self, Self::Error> {
        HeaderValue::try_from(value.encoded_form())
    }
}

impl TryFrom<EncodedBytes> for HeaderValue {
    type Error = InvalidHeaderValue;

    fn try_from(value: EncodedBytes) -> Result<Self, Self::Error> {
        HeaderValue::try_from(&value)
    }
}

/// Decode a header value holding base64url-unpadded text.
impl TryFrom<&HeaderValue> for EncodedBytes {
    type Error = Error;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        let text = value.to_str().map_err(|_| {
            tracing::debug!("rejected non-ASCII header value");
            Error::InvalidEncoding
        })?;
        EncodedBytes::decode(text)
    }
}

impl TryFrom<HeaderValue> for EncodedBytes {
    type Error = Error;

    fn try_from(value: HeaderValue) -> Result<Self, Self::Error> {
        EncodedBytes::try_from(&value)
    }
}
