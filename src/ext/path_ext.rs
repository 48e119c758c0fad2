use std::path::{Component, Path, PathBuf};

/// Joins a relative path onto the working directory without touching the
/// filesystem. `.` and `..` are kept as written.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(current_dir) => current_dir.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Renders a path for log and error messages: canonical if it exists,
/// otherwise absolute with `.` and `..` folded away.
pub fn best_effort_path_display(path: &Path) -> String {
    match path.canonicalize() {
        Ok(canonical_path) => canonical_path.display().to_string(),
        Err(_) => normalize_path(&absolute_path(path)).display().to_string(),
    }
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

pub trait PathExt {
    fn best_effort_path_display(&self) -> String;
    fn to_absolute(&self) -> PathBuf;
}

impl<P: AsRef<Path> + ?Sized> PathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }

    fn to_absolute(&self) -> PathBuf {
        absolute_path(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/a/b/../c", "/a/c")]
    #[case("/a/./b", "/a/b")]
    #[case("/../a", "/a")]
    #[case("/a/b/..", "/a")]
    fn normalize_folds_dot_components(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_path(Path::new(input)), PathBuf::from(expected));
    }

    #[test]
    fn absolute_path_keeps_absolute_input() {
        assert_eq!(
            absolute_path(Path::new("/tmp/x/../y")),
            PathBuf::from("/tmp/x/../y")
        );
    }

    #[test]
    fn absolute_path_prefixes_working_directory() {
        let cwd = std::env::current_dir().expect("Failed to read current dir");
        assert_eq!(absolute_path(Path::new("file.txt")), cwd.join("file.txt"));
    }

    #[test]
    fn display_of_missing_path_is_absolute() {
        let display = "does/not/../exist.txt".best_effort_path_display();
        assert!(Path::new(&display).is_absolute());
        assert!(display.ends_with("does/exist.txt"));
    }
}
