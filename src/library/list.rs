use std::path::Path;

use walkdir::WalkDir;

/// List the names of every file sitting in the library directory.
///
/// The listing is recomputed on each call and keeps whatever order the
/// directory yields. Nothing is filtered out, so a copy that failed
/// import validation is listed alongside real tracks. A missing or
/// unreadable directory yields an empty list.
pub fn list_tracks(library_dir: &Path) -> Vec<String> {
    WalkDir::new(library_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect()
}
