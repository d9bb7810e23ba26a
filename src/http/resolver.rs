use std::path::{Path, PathBuf};

/// What a URL resolved to under the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A path worth opening as a regular file
    File(PathBuf),
    /// Nothing servable there
    NotFound,
}

/// Maps a URL token to a candidate path under the document root.
///
/// The candidate is the literal concatenation of root and URL; a URL ending
/// in `/` gets the index file name appended before the filesystem is
/// consulted. A URL that names a directory gets the index file name pushed
/// as an extra segment, and the result is carried forward without another
/// stat; whether it opens is decided by the connection handler.
///
/// URLs whose `..` segments would climb above the document root are
/// rejected up front and answered like any other missing resource.
pub async fn resolve(root: &Path, url: &str, index: &str) -> Resolution {
    if escapes_root(url) {
        return Resolution::NotFound;
    }

    let mut raw = root.as_os_str().to_os_string();
    raw.push(url);
    if url.ends_with('/') {
        raw.push(index);
    }
    let mut path = PathBuf::from(raw);

    match tokio::fs::metadata(&path).await {
        Err(_) => Resolution::NotFound,
        Ok(meta) => {
            if meta.is_dir() {
                path.push(index);
            }
            Resolution::File(path)
        }
    }
}

/// Lexical traversal check: does the segment walk ever leave the root?
fn escapes_root(url: &str) -> bool {
    let mut depth: i32 = 0;
    for segment in url.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            _ => depth += 1,
        }
    }
    false
}
