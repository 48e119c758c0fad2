use clap::ValueEnum;
use derive_more::Display;

use crate::content::{
    Codec, CodecError, ContentFile,
    codec::{MalformedTextSnafu, UnmappableCharacterSnafu},
};

/// Character encodings understood by [`TextCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, ValueEnum)]
pub enum Encoding {
    #[default]
    #[display("UTF-8")]
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[display("UTF-16LE")]
    #[value(name = "utf-16le", alias = "utf16le")]
    Utf16Le,
    #[display("UTF-16BE")]
    #[value(name = "utf-16be", alias = "utf16be")]
    Utf16Be,
    #[display("ISO-8859-1")]
    #[value(name = "latin1", alias = "iso-8859-1")]
    Latin1,
    #[display("US-ASCII")]
    #[value(name = "ascii", alias = "us-ascii")]
    Ascii,
}

impl Encoding {
    /// Looks an encoding up by any of its command-line names, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(label.trim(), true).ok()
    }

    pub fn decode(self, bytes: Vec<u8>) -> Result<String, CodecError> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes).map_err(|_| MalformedTextSnafu { encoding: self }.build())
            }
            Encoding::Utf16Le => self.decode_utf16(&bytes, u16::from_le_bytes),
            Encoding::Utf16Be => self.decode_utf16(&bytes, u16::from_be_bytes),
            Encoding::Latin1 => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
            Encoding::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&byte| char::from(byte)).collect())
                } else {
                    MalformedTextSnafu { encoding: self }.fail()
                }
            }
        }
    }

    pub fn encode(self, text: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Encoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Encoding::Latin1 => self.encode_single_byte(text, 0xFF),
            Encoding::Ascii => self.encode_single_byte(text, 0x7F),
        }
    }

    fn decode_utf16(
        self,
        bytes: &[u8],
        to_unit: fn([u8; 2]) -> u16,
    ) -> Result<String, CodecError> {
        if bytes.len() % 2 != 0 {
            return MalformedTextSnafu { encoding: self }.fail();
        }
        let units = bytes
            .chunks_exact(2)
            .map(|pair| to_unit([pair[0], pair[1]]))
            .collect::<Vec<_>>();
        String::from_utf16(&units).map_err(|_| MalformedTextSnafu { encoding: self }.build())
    }

    fn encode_single_byte(self, text: &str, max: u32) -> Result<Vec<u8>, CodecError> {
        text.chars()
            .map(|character| {
                u8::try_from(u32::from(character))
                    .ok()
                    .filter(|&byte| u32::from(byte) <= max)
                    .ok_or_else(|| {
                        UnmappableCharacterSnafu {
                            character,
                            encoding: self,
                        }
                        .build()
                    })
            })
            .collect()
    }
}

/// Text stored in a configurable [`Encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCodec {
    pub encoding: Encoding,
}

impl TextCodec {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }
}

impl Codec for TextCodec {
    type Content = String;
    type Input = str;

    fn decode(&self, bytes: Vec<u8>) -> Result<String, CodecError> {
        self.encoding.decode(bytes)
    }

    fn encode(&self, content: &str) -> Result<Vec<u8>, CodecError> {
        self.encoding.encode(content)
    }
}

pub type TextFile = ContentFile<TextCodec>;

impl ContentFile<TextCodec> {
    pub fn encoding(&self) -> Encoding {
        self.codec().encoding
    }

    /// Changes the encoding used by subsequent reads and writes.
    pub fn set_encoding(&mut self, encoding: Encoding) -> &mut Self {
        self.codec_mut().encoding = encoding;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.set_encoding(encoding);
        self
    }
}
