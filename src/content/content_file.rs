use std::path::{Path, PathBuf};

use derive_more::Deref;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::{
    content::{Codec, CodecError},
    ext::PathExt,
    host,
    node::{File, FileRole, FromNode, PathNode},
};

/// A file whose bytes are read and written through a [`Codec`].
///
/// Reads come in three flavours: [`read`](Self::read) returns the error,
/// [`read_or_none`](Self::read_or_none) maps it to `None` and
/// [`read_or_default`](Self::read_or_default) to a fallback. Writes are best
/// effort: only an encoding failure is reported.
#[derive(Debug, Clone, Deref)]
pub struct ContentFile<C> {
    #[deref]
    file: File,
    codec: C,
}

impl<C: Codec + Default> ContentFile<C> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(File::new(path), C::default())
    }

    pub fn with_child(parent: impl AsRef<Path>, child: impl AsRef<Path>) -> Self {
        Self::with_codec(File::with_child(parent, child), C::default())
    }
}

impl<C: Codec> ContentFile<C> {
    pub fn with_codec(file: File, codec: C) -> Self {
        Self { file, codec }
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn into_file(self) -> File {
        self.file
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn codec_mut(&mut self) -> &mut C {
        &mut self.codec
    }

    pub fn read(&self) -> Result<C::Content, ContentError> {
        let bytes = host::read(self.path()).context(ReadSnafu {
            path: self.path().to_path_buf(),
        })?;
        self.codec.decode(bytes).context(DecodeSnafu {
            path: self.path().to_path_buf(),
        })
    }

    pub fn read_or_none(&self) -> Option<C::Content> {
        self.read()
            .inspect_err(|err| debug!("Treating unreadable file as absent: {}", err))
            .ok()
    }

    pub fn read_or_default(&self, fallback: C::Content) -> C::Content {
        self.read_or_none().unwrap_or(fallback)
    }

    /// Encodes and writes `content`, reporting every failure.
    pub fn try_write(&self, content: &C::Input) -> Result<(), ContentError> {
        let bytes = self.encode(content)?;
        host::write(self.path(), &bytes).context(WriteSnafu {
            path: self.path().to_path_buf(),
        })
    }

    /// Replaces the file's contents, creating missing parent directories.
    /// Host write failures are logged and otherwise ignored.
    pub fn write(&self, content: &C::Input) -> Result<&Self, ContentError> {
        let bytes = self.encode(content)?;
        if let Err(err) = host::write(self.path(), &bytes) {
            debug!("Ignoring failure to write {}: {}", self.file, err);
        }
        Ok(self)
    }

    /// Writes only when nothing exists at the path yet. The existence check and
    /// the write are separate host calls.
    pub fn write_if_not_exists(&self, content: &C::Input) -> Result<&Self, ContentError> {
        if !self.exists() {
            self.write(content)?;
        }
        Ok(self)
    }

    pub fn delete(&self) -> &Self {
        self.file.delete();
        self
    }

    fn encode(&self, content: &C::Input) -> Result<Vec<u8>, ContentError> {
        self.codec.encode(content).context(EncodeSnafu {
            path: self.path().to_path_buf(),
        })
    }
}

impl<C: Codec + Default> FromNode for ContentFile<C> {
    fn from_node(node: PathNode) -> Self {
        Self::with_codec(File::from_node(node), C::default())
    }
}

impl<C: Codec + Default> FileRole for ContentFile<C> {}

impl<C: Codec + Default> From<File> for ContentFile<C> {
    fn from(file: File) -> Self {
        Self::with_codec(file, C::default())
    }
}

impl<C> AsRef<Path> for ContentFile<C> {
    fn as_ref(&self) -> &Path {
        self.file.path()
    }
}

#[derive(Debug, Snafu)]
pub enum ContentError {
    #[snafu(display("Failed to read {}", path.best_effort_path_display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to decode the contents of {}", path.best_effort_path_display()))]
    DecodeError { path: PathBuf, source: CodecError },
    #[snafu(display("Failed to encode content for {}", path.best_effort_path_display()))]
    EncodeError { path: PathBuf, source: CodecError },
    #[snafu(display("Failed to write {}", path.best_effort_path_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BinaryFile, Encoding, TextFile};
    use crate::node::Directory;
    use rstest::*;
    use tempfile::TempDir;

    #[test]
    fn binary_file_lifecycle() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = BinaryFile::new(temp_dir.path().join("test/binary.bin"));
        assert!(!file.exists());

        file.write_if_not_exists(&[1, 2, 3]).expect("Failed to encode");
        assert!(file.exists());
        assert_eq!(file.read().expect("Failed to read"), vec![1, 2, 3]);

        file.delete();
        assert!(!file.exists());
    }

    #[test]
    fn text_file_lifecycle() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = TextFile::new(temp_dir.path().join("test/text.txt"));
        assert!(!file.exists());

        file.write_if_not_exists("Hello, world!")
            .expect("Failed to encode");
        assert!(file.exists());
        assert_eq!(file.read().expect("Failed to read"), "Hello, world!");

        file.delete();
        assert!(!file.exists());
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![0])]
    #[case((0..=255).collect())]
    fn binary_round_trip_is_exact(#[case] bytes: Vec<u8>) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = BinaryFile::new(temp_dir.path().join("data.bin"));

        file.write(&bytes).expect("Failed to encode");

        assert_eq!(file.read().expect("Failed to read"), bytes);
    }

    #[rstest]
    #[case(Encoding::Utf8, "hello world")]
    #[case(Encoding::Utf8, "")]
    #[case(Encoding::Utf16Be, "special chars: äöü🚀")]
    #[case(Encoding::Latin1, "multiline\ncontent\nwith\nnewlines")]
    fn text_round_trip_with_fixed_encoding(#[case] encoding: Encoding, #[case] text: &str) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = TextFile::new(temp_dir.path().join("t.txt")).with_encoding(encoding);

        file.write(text).expect("Failed to encode");

        assert_eq!(file.read().expect("Failed to read"), text);
    }

    #[test]
    fn write_if_not_exists_keeps_existing_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = TextFile::new(temp_dir.path().join("keep.txt"));

        file.write("A").expect("Failed to encode");
        file.write_if_not_exists("B").expect("Failed to encode");

        assert_eq!(file.read().expect("Failed to read"), "A");
    }

    #[test]
    fn write_overwrites_existing_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = TextFile::new(temp_dir.path().join("over.txt"));

        file.write("a much longer first version").expect("encode");
        file.write("short").expect("encode");

        assert_eq!(file.read().expect("Failed to read"), "short");
    }

    #[test]
    fn read_policies_on_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = TextFile::new(temp_dir.path().join("missing.txt"));

        assert_eq!(file.read_or_default("fallback".to_string()), "fallback");
        assert_eq!(file.read_or_none(), None);
        assert!(matches!(file.read(), Err(ContentError::ReadError { .. })));
    }

    #[test]
    fn decode_failure_is_reported_and_mapped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let raw = BinaryFile::new(temp_dir.path().join("bad.txt"));
        raw.write(&[0xFF, 0xFE, 0x00, 0xC3]).expect("encode");
        let text: TextFile = raw.cast();

        assert!(matches!(text.read(), Err(ContentError::DecodeError { .. })));
        assert_eq!(text.read_or_none(), None);
        assert_eq!(text.read_or_default(String::from("x")), "x");
    }

    #[test]
    fn encode_failure_propagates_from_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = TextFile::new(temp_dir.path().join("latin.txt")).with_encoding(Encoding::Latin1);

        let result = file.write("snow ☃");

        assert!(matches!(result, Err(ContentError::EncodeError { .. })));
        assert!(!file.exists());
    }

    #[test]
    fn host_write_failure_is_swallowed_but_try_write_reports_it() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let occupied = Directory::new(temp_dir.path().join("occupied"));
        occupied.create();
        let file: TextFile = occupied.cast();

        assert!(file.write("text").is_ok());
        assert!(matches!(
            file.try_write("text"),
            Err(ContentError::WriteError { .. })
        ));
        assert!(occupied.is_directory());
    }

    #[test]
    fn error_display_names_the_path() {
        let err = TextFile::new("/this/path/does/not/exist.txt")
            .read()
            .expect_err("Expected read failure");

        let message = err.to_string();
        assert!(message.contains("Failed to read"));
        assert!(message.contains("/this/path/does/not/exist.txt"));
    }
}
