//! Static file serving module
//!
//! Maps a request target to a file under the asset root, reads it, and
//! collapses the result into one of two outcomes.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Result of serving one request target
#[derive(Debug, PartialEq, Eq)]
pub enum ServeOutcome {
    Served {
        body: Vec<u8>,
        content_type: &'static str,
    },
    NotFound,
}

impl ServeOutcome {
    /// Number of body bytes the response will carry
    pub fn body_len(&self) -> usize {
        match self {
            Self::Served { body, .. } => body.len(),
            Self::NotFound => http::NOT_FOUND_BODY.len(),
        }
    }

    pub const fn status(&self) -> u16 {
        match self {
            Self::Served { .. } => 200,
            Self::NotFound => 404,
        }
    }

    pub fn into_response(self) -> Response<Full<Bytes>> {
        match self {
            Self::Served { body, content_type } => http::build_file_response(body, content_type),
            Self::NotFound => http::build_404_response(),
        }
    }
}

/// Turn a raw request target into a path relative to the asset root.
///
/// The query string is dropped first, then `/` becomes the default document.
pub fn resolve_target(target: &str, default_document: &str) -> String {
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    if path == "/" {
        default_document.to_string()
    } else {
        path.trim_start_matches('/').to_string()
    }
}

/// Join a relative path onto the root, refusing paths that climb above it.
pub fn resolve_path(root: &Path, relative: &str) -> Option<PathBuf> {
    let mut depth: usize = 0;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::ParentDir => depth = depth.checked_sub(1)?,
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(root.join(relative))
}

/// Every read error is a not-found, whatever its kind.
pub fn classify(read: io::Result<Vec<u8>>, content_type: &'static str) -> ServeOutcome {
    match read {
        Ok(body) => ServeOutcome::Served { body, content_type },
        Err(_) => ServeOutcome::NotFound,
    }
}

/// Resolve and read the file a request target names
pub async fn load_asset(root: &Path, default_document: &str, target: &str) -> ServeOutcome {
    let relative = resolve_target(target, default_document);
    let Some(file_path) = resolve_path(root, &relative) else {
        return ServeOutcome::NotFound;
    };

    let content_type = http::content_type_for(&file_path);
    classify(fs::read(&file_path).await, content_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_root() {
        assert_eq!(resolve_target("/", "index.html"), "index.html");
        assert_eq!(resolve_target("/", "home.htm"), "home.htm");
    }

    #[test]
    fn test_resolve_target_strips_query() {
        assert_eq!(resolve_target("/index.html?cachebust=1", "index.html"), "index.html");
        assert_eq!(resolve_target("/app.js?v=1?x=2", "index.html"), "app.js");
        assert_eq!(resolve_target("/?x=1", "index.html"), "index.html");
    }

    #[test]
    fn test_resolve_target_nested() {
        assert_eq!(
            resolve_target("/data/questions.json", "index.html"),
            "data/questions.json"
        );
        assert_eq!(resolve_target("/css/", "index.html"), "css/");
    }

    #[test]
    fn test_resolve_path_inside_root() {
        let root = Path::new("/srv/www");
        assert_eq!(
            resolve_path(root, "css/site.css"),
            Some(PathBuf::from("/srv/www/css/site.css"))
        );
        assert_eq!(
            resolve_path(root, "css/../index.html"),
            Some(PathBuf::from("/srv/www/css/../index.html"))
        );
        assert_eq!(resolve_path(root, "./a.js"), Some(PathBuf::from("/srv/www/./a.js")));
    }

    #[test]
    fn test_resolve_path_rejects_escape() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve_path(root, "../etc/passwd"), None);
        assert_eq!(resolve_path(root, "css/../../secret"), None);
        assert_eq!(resolve_path(root, ".."), None);
    }

    #[test]
    fn test_classify_collapses_errors() {
        let kinds = [
            io::ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidInput,
            io::ErrorKind::Other,
        ];
        for kind in kinds {
            assert_eq!(
                classify(Err(io::Error::new(kind, "boom")), "text/html"),
                ServeOutcome::NotFound
            );
        }
    }

    #[test]
    fn test_classify_success() {
        let outcome = classify(Ok(b"{}".to_vec()), "application/json");
        assert_eq!(outcome.status(), 200);
        assert_eq!(outcome.body_len(), 2);
        assert_eq!(
            outcome,
            ServeOutcome::Served {
                body: b"{}".to_vec(),
                content_type: "application/json"
            }
        );
    }
}
