//! Proptest support: values are arbitrary byte vectors, wrapped.
//!
//! Shrinking is the `Vec<u8>` value tree's shrinking. Every byte sequence
//! is a valid [`EncodedBytes`], so shrunk values stay valid.

use proptest::arbitrary::{Arbitrary, any_with};
use proptest::strategy::{Map, Strategy};

use crate::EncodedBytes;

impl Arbitrary for EncodedBytes {
    type Parameters = <Vec<u8> as Arbitrary>::Parameters;
    type Strategy = Map<<Vec<u8> as Arbitrary>::Strategy, fn(Vec<u8>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<Vec<u8>>(args).prop_map(EncodedBytes::new as fn(Vec<u8>) -> Self)
    }
}
