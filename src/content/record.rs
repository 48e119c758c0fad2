use std::{fmt, marker::PhantomData};

use bincode::{Decode, Encode, config};
use snafu::ResultExt;

use crate::content::{
    Codec, CodecError, ContentFile,
    codec::{RecordDecodeSnafu, RecordEncodeSnafu},
};

/// A single `T` stored in bincode's standard configuration.
pub struct BincodeCodec<T> {
    _record: PhantomData<fn() -> T>,
}

impl<T> Default for BincodeCodec<T> {
    fn default() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Clone for BincodeCodec<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T> fmt::Debug for BincodeCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BincodeCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T: Encode + Decode<()>> Codec for BincodeCodec<T> {
    type Content = T;
    type Input = T;

    fn decode(&self, bytes: Vec<u8>) -> Result<T, CodecError> {
        let (record, _) =
            bincode::decode_from_slice(&bytes, config::standard()).context(RecordDecodeSnafu)?;
        Ok(record)
    }

    fn encode(&self, content: &T) -> Result<Vec<u8>, CodecError> {
        bincode::encode_to_vec(content, config::standard()).context(RecordEncodeSnafu)
    }
}

pub type RecordFile<T> = ContentFile<BincodeCodec<T>>;
