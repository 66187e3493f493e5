//! Virtual path handling
//!
//! Virtual paths are absolute, forward-slash strings used as file system
//! keys. All helpers here are textual; none of them consult the OS, which
//! keeps resolution deterministic and identical across platforms.

/// Normalize a raw path into canonical virtual form.
///
/// Backslashes become forward slashes, duplicate separators collapse,
/// `.` segments disappear and `..` segments pop their parent (clamped at
/// the root). A leading drive letter (`C:`) is preserved with its case.
/// Relative input is anchored at the root so that every output is an
/// absolute key. Trailing separators are stripped except at the root.
///
/// Normalization is idempotent: feeding an already-normalized path back
/// in returns the identical string.
pub fn normalize_path(raw: &str) -> String {
    let slashed = raw.replace('\\', "/");
    let mut rest = slashed.trim_start_matches('/');

    // Optional drive-letter prefix, e.g. "C:" in "C:/src/app.js".
    let mut drive = "";
    let bytes = rest.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        drive = &rest[..2];
        rest = rest[2..].trim_start_matches('/');
    }

    let mut components: Vec<&str> = Vec::new();
    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            _ => components.push(part),
        }
    }

    let mut normalized = String::with_capacity(slashed.len());
    normalized.push_str(drive);
    normalized.push('/');
    normalized.push_str(&components.join("/"));
    normalized
}

/// Whether a path is absolute in any platform spelling.
///
/// Accepts a leading forward or backward slash as well as a drive-letter
/// prefix (`C:`), mirroring how import specifiers spell absolute paths.
pub fn is_absolute_path(path: &str) -> bool {
    if path.starts_with('/') || path.starts_with('\\') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Parent directory of a normalized virtual path.
///
/// The root (`/`) and drive roots (`C:/`) are their own parents.
pub fn dirname(path: &str) -> &str {
    if path == "/" || is_drive_root(path) {
        return path;
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    if is_drive_root(trimmed) {
        return trimmed;
    }
    let Some(idx) = trimmed.rfind('/') else {
        return "/";
    };
    if idx == 0 {
        return "/";
    }
    let bytes = trimmed.as_bytes();
    if idx == 2 && bytes[1] == b':' {
        return &trimmed[..3];
    }
    &trimmed[..idx]
}

/// Append a segment to a base directory without normalizing.
///
/// The base is expected to be a normalized absolute path; callers that
/// join untrusted segments normalize the result afterwards.
pub fn join(base: &str, segment: &str) -> String {
    let mut joined = String::with_capacity(base.len() + segment.len() + 1);
    joined.push_str(base);
    if !joined.ends_with('/') {
        joined.push('/');
    }
    joined.push_str(segment);
    joined
}

/// Anchor a specifier at a base directory and normalize the result.
///
/// Absolute specifiers ignore the base; relative ones are joined against
/// it. Either way the output is a normalized virtual path.
pub fn resolve_from(base_dir: &str, specifier: &str) -> String {
    if is_absolute_path(specifier) {
        normalize_path(specifier)
    } else {
        normalize_path(&join(base_dir, specifier))
    }
}

fn is_drive_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}
