use crate::content::{Codec, CodecError, ContentFile};

/// Bytes stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    type Content = Vec<u8>;
    type Input = [u8];

    fn decode(&self, bytes: Vec<u8>) -> Result<Vec<u8>, CodecError> {
        Ok(bytes)
    }

    fn encode(&self, content: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(content.to_vec())
    }
}

pub type BinaryFile = ContentFile<BinaryCodec>;
