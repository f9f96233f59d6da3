use std::path::Path;

use crate::foundation::error::{ReelError, ReelResult};

/// Return `true` for sources the engine fetches itself.
pub fn is_remote(source: &str) -> bool {
    let s = source.trim_start();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Normalize a relative asset path into a stable `/`-separated form.
///
/// Rejects absolute paths, `..` components and empty paths.
pub fn normalize_rel_path(source: &str) -> ReelResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ReelError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(ReelError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ReelError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ReelError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Resolve `videoSrc` as a static file.
///
/// Remote URLs pass through unchanged. Local sources are normalized and, when `public_dir` is
/// set, joined under it.
pub fn resolve_static_file(source: &str, public_dir: Option<&Path>) -> ReelResult<String> {
    if is_remote(source) {
        return Ok(source.trim().to_string());
    }
    let rel = normalize_rel_path(source)?;
    Ok(match public_dir {
        Some(dir) => dir.join(&rel).to_string_lossy().replace('\\', "/"),
        None => rel,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolve.rs"]
mod tests;
