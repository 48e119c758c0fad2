//! Files with typed contents.
//!
//! A [`ContentFile`] pairs a [`File`](crate::node::File) with a [`Codec`].
//! The codecs here cover text in several encodings, raw bytes, bincode
//! records and zstd compression over any of them.

mod binary;
mod codec;
mod compressed;
mod content_file;
mod record;
mod text;

pub use binary::{BinaryCodec, BinaryFile};
pub use codec::{Codec, CodecError};
pub use compressed::{Compressed, CompressedFile};
pub use content_file::{ContentError, ContentFile};
pub use record::{BincodeCodec, RecordFile};
pub use text::{Encoding, TextCodec, TextFile};
