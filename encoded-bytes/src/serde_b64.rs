//! Serde bridge selecting base64url text or raw bytes by format.
//!
//! Human-readable formats (JSON, TOML, map keys, URL deserializers) carry
//! the base64url-unpadded string. Binary formats carry the raw bytes through
//! their own byte-string framing via `serialize_bytes`.
//!
//! [`EncodedBytes`] implements [`Serialize`] and [`Deserialize`] this way.
//! For plain `Vec<u8>` fields the same behavior is available as
//! `#[serde(with = "encoded_bytes::serde_b64")]`.

use std::fmt;

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::EncodedBytes;

/// Serialize raw bytes as base64url text or as a native byte string.
pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if serializer.is_human_readable() {
        serializer.serialize_str(&Base64UrlUnpadded::encode_string(bytes))
    } else {
        serializer.serialize_bytes(bytes)
    }
}

/// Deserialize raw bytes from base64url text or a native byte string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    EncodedBytes::deserialize(deserializer).map(EncodedBytes::into_inner)
}

impl Serialize for EncodedBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize(self.as_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for EncodedBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(TextVisitor)
        } else {
            deserializer.deserialize_byte_buf(RawVisitor)
        }
    }
}

/// Accepts base64url text only.
struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = EncodedBytes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base64url string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        EncodedBytes::decode(v).map_err(E::custom)
    }
}

/// Accepts a native byte string.
struct RawVisitor;

impl<'de> Visitor<'de> for RawVisitor {
    type Value = EncodedBytes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EncodedBytes::from(v))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EncodedBytes::new(v))
    }

    // Some binary formats model byte strings as sequences of integers.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(EncodedBytes::new(bytes))
    }
}
