mod path_ext;

pub use path_ext::{PathExt, absolute_path, best_effort_path_display};
