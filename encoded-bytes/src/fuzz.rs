//! `arbitrary` support for fuzz targets, delegating to `Vec<u8>`.

use arbitrary::{Arbitrary, Result, Unstructured};

use crate::EncodedBytes;

impl<'a> Arbitrary<'a> for EncodedBytes {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Vec::<u8>::arbitrary(u).map(EncodedBytes::new)
    }

    fn arbitrary_take_rest(u: Unstructured<'a>) -> Result<Self> {
        Vec::<u8>::arbitrary_take_rest(u).map(EncodedBytes::new)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <Vec<u8> as Arbitrary<'a>>::size_hint(depth)
    }
}
