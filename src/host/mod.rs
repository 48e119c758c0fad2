//! Primitive filesystem operations the node types are built on.
//!
//! Every function performs at most one blocking `std::fs` call (plus parent
//! creation for [`write`]) and holds no handle past its return.

use std::{fs, io, path::Path};

use tracing::trace;

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn is_dir(path: &Path) -> bool {
    path.is_dir()
}

pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

pub fn create_dir_all(path: &Path) -> io::Result<()> {
    trace!("create_dir_all {}", path.display());
    fs::create_dir_all(path)
}

pub fn remove_dir_all(path: &Path) -> io::Result<()> {
    trace!("remove_dir_all {}", path.display());
    fs::remove_dir_all(path)
}

pub fn remove_dir(path: &Path) -> io::Result<()> {
    trace!("remove_dir {}", path.display());
    fs::remove_dir(path)
}

pub fn remove_file(path: &Path) -> io::Result<()> {
    trace!("remove_file {}", path.display());
    fs::remove_file(path)
}

pub fn read(path: &Path) -> io::Result<Vec<u8>> {
    trace!("read {}", path.display());
    fs::read(path)
}

/// Overwrites `path` with `bytes`, creating missing parent directories first.
pub fn write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    trace!("write {} ({} bytes)", path.display(), bytes.len());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}
