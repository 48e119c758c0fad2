use std::{io::Write, path::Path};

use colored::Colorize;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::cli::Command;
use crate::config::{Settings, SettingsError};
use crate::content::{
    Codec, Compressed, CompressedFile, ContentError, ContentFile, Encoding, TextCodec, TextFile,
};
use crate::node::{Directory, Entry, EntryKind, File, PathNode};

const COMPRESSED_EXTENSION: &str = "zst";

pub struct Application;

impl Application {
    pub fn run(
        app_config: impl Into<RuntimeConfig>,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let settings = Settings::read(&app_config.settings_path).context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        match app_config.command {
            Command::Ls {
                path,
                recursive,
                files,
                dirs,
                ext,
                order,
            } => {
                let root = Directory::new(path);
                let walker = if recursive {
                    root.walk_recursive()
                } else {
                    root.walk()
                }
                .order(order.unwrap_or(settings.order));

                let entries = walker.entries_matching(|entry| {
                    let kind_matches = match (files, dirs) {
                        (true, _) => entry.kind() == EntryKind::File,
                        (_, true) => entry.kind() == EntryKind::Directory,
                        _ => true,
                    };
                    kind_matches
                        && ext
                            .as_deref()
                            .is_none_or(|ext| entry.to_file().extension() == ext)
                });
                for entry in &entries {
                    writeln!(out, "{}", render_entry(&root, entry)).context(OutputSnafu)?;
                }
            }
            Command::Cat { path, encoding } => {
                let file = File::new(path);
                let encoding = encoding.unwrap_or(settings.encoding);
                let text = if file.extension() == COMPRESSED_EXTENSION {
                    compressed_text(file, encoding, &settings).read()
                } else {
                    TextFile::from(file).with_encoding(encoding).read()
                }
                .context(ReadSnafu)?;
                write!(out, "{text}").context(OutputSnafu)?;
            }
            Command::Write {
                path,
                content,
                if_not_exists,
                encoding,
            } => {
                let file = File::new(path);
                let encoding = encoding.unwrap_or(settings.encoding);
                info!("Writing {} as {}", file, encoding);
                let written = if file.extension() == COMPRESSED_EXTENSION {
                    let target = compressed_text(file, encoding, &settings);
                    write_text(&target, &content, if_not_exists)
                } else {
                    let target = TextFile::from(file).with_encoding(encoding);
                    write_text(&target, &content, if_not_exists)
                };
                written.context(WriteSnafu)?;
            }
            Command::Mkdir { path } => {
                let directory = Directory::new(path);
                info!("Creating {}", directory);
                directory.create();
            }
            Command::Rm { path } => {
                let node = PathNode::new(path);
                info!("Deleting {}", node);
                if node.is_directory() {
                    node.to_directory().delete();
                } else {
                    node.to_file().delete();
                }
            }
        }

        Ok(())
    }
}

fn compressed_text(
    file: File,
    encoding: Encoding,
    settings: &Settings,
) -> CompressedFile<TextCodec> {
    ContentFile::with_codec(
        file,
        Compressed::new(TextCodec::new(encoding), settings.compression_level),
    )
}

fn write_text<C: Codec<Input = str>>(
    file: &ContentFile<C>,
    content: &str,
    if_not_exists: bool,
) -> Result<(), ContentError> {
    if if_not_exists {
        file.write_if_not_exists(content)?;
    } else {
        file.write(content)?;
    }
    Ok(())
}

fn render_entry(root: &Directory, entry: &Entry) -> String {
    let relative = entry
        .path()
        .strip_prefix(root.path())
        .unwrap_or(entry.path());
    render_relative(relative, entry.kind())
}

fn render_relative(relative: &Path, kind: EntryKind) -> String {
    match kind {
        EntryKind::Directory => format!("{}/", relative.display()).blue().bold().to_string(),
        EntryKind::File => relative.display().to_string(),
        EntryKind::Other => relative.display().to_string().yellow().to_string(),
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Could not read the requested file"))]
    ReadError { source: ContentError },
    #[snafu(display("Could not write the requested file"))]
    WriteError { source: ContentError },
    #[snafu(display("Failed to write output"))]
    OutputError { source: std::io::Error },
}
