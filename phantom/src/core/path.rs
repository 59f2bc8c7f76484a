//! Resolution of script-relative file names.

use std::path::PathBuf;

/// Join `script_dir` and `file_name` by plain string concatenation.
///
/// No separator is inserted and nothing is normalized: `..` segments and
/// absolute-looking names are kept verbatim. Callers that want a separator
/// must end `script_dir` with one.
pub fn resolve(script_dir: &str, file_name: &str) -> PathBuf {
    let mut joined = String::with_capacity(script_dir.len() + file_name.len());
    joined.push_str(script_dir);
    joined.push_str(file_name);
    PathBuf::from(joined)
}
