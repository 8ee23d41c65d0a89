use crate::models::MemberRecord;
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::fs;
use tracing::error;

pub const DEFAULT_SCOPE: &str = "default";

/// Roster fetch failures. These cross the component boundary as-is so the
/// caller can tell a failed fetch apart from a legitimately empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid roster scope {0:?}")]
    InvalidScope(String),

    #[error("failed to read roster for scope {scope:?}: {source}")]
    Read {
        scope: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode roster for scope {scope:?}: {source}")]
    Decode {
        scope: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn resolve_roster_dir() -> PathBuf {
    match env::var("GYM_ROSTER_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("data/rosters"),
    }
}

/// Reads the full roster for `scope` fresh from disk. No caching: every
/// classification request sees the provider's current snapshot.
pub async fn fetch_roster(
    dir: &Path,
    scope: Option<&str>,
) -> Result<Vec<MemberRecord>, FetchError> {
    let scope = scope.unwrap_or(DEFAULT_SCOPE);
    if !is_valid_scope(scope) {
        return Err(FetchError::InvalidScope(scope.to_string()));
    }

    let path = dir.join(format!("{scope}.json"));
    let bytes = match fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(source) => {
            error!("failed to read roster file {}: {source}", path.display());
            return Err(FetchError::Read {
                scope: scope.to_string(),
                source,
            });
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(roster) => Ok(roster),
        Err(source) => {
            error!("failed to parse roster file {}: {source}", path.display());
            Err(FetchError::Decode {
                scope: scope.to_string(),
                source,
            })
        }
    }
}

// A scope must stay a single path segment under the roster directory.
fn is_valid_scope(scope: &str) -> bool {
    !scope.is_empty()
        && scope.len() <= 64
        && scope
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_must_be_a_single_path_segment() {
        assert!(is_valid_scope("default"));
        assert!(is_valid_scope("downtown-2"));
        assert!(!is_valid_scope(""));
        assert!(!is_valid_scope("../secrets"));
        assert!(!is_valid_scope("a/b"));
        assert!(!is_valid_scope(&"x".repeat(65)));
    }
}
