use snafu::Snafu;

use crate::content::Encoding;

/// Translation between a typed payload and the bytes stored on disk.
///
/// `Content` is what reads produce; `Input` is what writes borrow, so a text
/// codec reads a `String` and writes from a `&str`.
pub trait Codec {
    type Content;
    type Input: ?Sized;

    fn decode(&self, bytes: Vec<u8>) -> Result<Self::Content, CodecError>;
    fn encode(&self, content: &Self::Input) -> Result<Vec<u8>, CodecError>;
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CodecError {
    #[snafu(display("Content is not valid {encoding}"))]
    MalformedTextError { encoding: Encoding },
    #[snafu(display("Character {character:?} cannot be represented in {encoding}"))]
    UnmappableCharacterError { character: char, encoding: Encoding },
    #[snafu(display("Failed to decode record"))]
    RecordDecodeError {
        source: bincode::error::DecodeError,
    },
    #[snafu(display("Failed to encode record"))]
    RecordEncodeError {
        source: bincode::error::EncodeError,
    },
    #[snafu(display("Failed to {operation} zstd frame"))]
    CompressionError {
        operation: &'static str,
        source: std::io::Error,
    },
}
