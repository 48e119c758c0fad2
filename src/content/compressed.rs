use snafu::ResultExt;

use crate::content::{Codec, CodecError, ContentFile, codec::CompressionSnafu};

/// Wraps another codec's bytes in a zstd frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed<C> {
    inner: C,
    level: i32,
}

impl<C> Compressed<C> {
    pub fn new(inner: C, level: i32) -> Self {
        Self { inner, level }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl<C: Default> Default for Compressed<C> {
    fn default() -> Self {
        Self::new(C::default(), zstd::DEFAULT_COMPRESSION_LEVEL)
    }
}

impl<C: Codec> Codec for Compressed<C> {
    type Content = C::Content;
    type Input = C::Input;

    fn decode(&self, bytes: Vec<u8>) -> Result<Self::Content, CodecError> {
        let raw = zstd::decode_all(bytes.as_slice()).context(CompressionSnafu {
            operation: "decompress",
        })?;
        self.inner.decode(raw)
    }

    fn encode(&self, content: &Self::Input) -> Result<Vec<u8>, CodecError> {
        let raw = self.inner.encode(content)?;
        zstd::encode_all(raw.as_slice(), self.level).context(CompressionSnafu {
            operation: "compress",
        })
    }
}

pub type CompressedFile<C> = ContentFile<Compressed<C>>;
