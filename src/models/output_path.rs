use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Destination for `input`: same directory, `<stem><suffix>.<extension>`.
///
/// Only the last extension is stripped, so `scan.page1.png` becomes
/// `scan.page1_processed.pdf`. A bare file name stays relative.
pub fn output_path_for(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(suffix);
    name.push(".");
    name.push(extension);

    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
