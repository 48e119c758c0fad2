use std::{io::ErrorKind, path::Path};

use clap::ValueEnum;
use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    content::{ContentError, Encoding, TextFile},
    ext::PathExt,
    node::EntryOrder,
};

pub const SETTINGS_FILE_NAME: &str = "typedfs.yaml";

/// Defaults applied by the command line when a flag is not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub encoding: Encoding,
    pub order: EntryOrder,
    pub compression_level: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            order: EntryOrder::Name,
            compression_level: zstd::DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file gives the defaults; a file
    /// that cannot be read, decoded or parsed is an error.
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        debug!("Reading settings from {}", path.best_effort_path_display());
        match TextFile::new(path).read() {
            Ok(contents) => contents.as_str().try_into(),
            Err(ContentError::ReadError { source, .. })
                if source.kind() == ErrorKind::NotFound =>
            {
                info!("No settings file found, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err).context(ReadSnafu),
        }
    }

    fn apply(&mut self, top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<(), SettingsError> {
        for (key, value) in top_level.iter() {
            let Some(key) = key.as_str() else {
                warn!("Skipping non-string settings key: {:?}", key);
                continue;
            };
            match key {
                "encoding" => {
                    let label = value.as_str().context(NotAStringSnafu { key })?;
                    self.encoding =
                        Encoding::from_label(label).context(UnknownEncodingSnafu { label })?;
                }
                "order" => {
                    let label = value.as_str().context(NotAStringSnafu { key })?;
                    self.order = <EntryOrder as ValueEnum>::from_str(label.trim(), true)
                        .ok()
                        .context(UnknownOrderSnafu { label })?;
                }
                "compression_level" => {
                    let level = match value {
                        Yaml::Value(Scalar::Integer(level)) => Some(*level),
                        _ => None,
                    };
                    self.compression_level = level
                        .and_then(|level| i32::try_from(level).ok())
                        .filter(|level| zstd::compression_level_range().contains(level))
                        .context(InvalidCompressionLevelSnafu)?;
                }
                other => warn!("Ignoring unknown settings key '{}'", other),
            }
        }
        Ok(())
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let mut settings = Self::default();

        let Some(document) = documents.first() else {
            return Ok(settings);
        };
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;
        settings.apply(top_level)?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file"))]
    ReadError { source: ContentError },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Setting '{}' should be a string", key))]
    NotAString { key: String },
    #[snafu(display("Unknown encoding '{}'", label))]
    UnknownEncoding { label: String },
    #[snafu(display("Unknown entry order '{}', expected 'native' or 'name'", label))]
    UnknownOrder { label: String },
    #[snafu(display("Compression level should be an integer zstd accepts"))]
    InvalidCompressionLevel,
}
