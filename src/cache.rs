//! On-disk cache for fetched images.
//!
//! Entries live under `<cache_dir>/<sha256(source)>/asset.bin` so arbitrary
//! URLs map to safe directory names. The cache is an optimisation only: every
//! failure here is logged and treated as a miss.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const ASSET_FILE: &str = "asset.bin";

pub fn hash_dir(cache_dir: &Path, source: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    cache_dir.join(hash)
}

fn asset_path(cache_dir: &Path, source: &str) -> PathBuf {
    hash_dir(cache_dir, source).join(ASSET_FILE)
}

/// Cached bytes for `source`, if present.
pub fn load_cached_asset(cache_dir: &Path, source: &str) -> Option<Vec<u8>> {
    let path = asset_path(cache_dir, source);
    let bytes = fs::read(&path).ok()?;
    debug!(path = %path.display(), bytes = bytes.len(), "Asset cache hit");
    Some(bytes)
}

/// Persist fetched bytes. Errors are ignored to keep the UI responsive.
pub fn store_cached_asset(cache_dir: &Path, source: &str, bytes: &[u8]) {
    let path = asset_path(cache_dir, source);
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Failed to create asset cache dir: {err}");
            return;
        }
    }
    if let Err(err) = fs::write(&path, bytes) {
        warn!(path = %path.display(), "Failed to write asset cache: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zine-viewer-cache-{name}-{}", std::process::id()))
    }

    #[test]
    fn hash_dir_is_stable_and_distinct() {
        let root = Path::new(".cache");
        let a = hash_dir(root, "https://example.org/a.png");
        assert_eq!(a, hash_dir(root, "https://example.org/a.png"));
        assert_ne!(a, hash_dir(root, "https://example.org/b.png"));
        assert_eq!(a.parent(), Some(root));
        assert_eq!(a.file_name().map(|n| n.len()), Some(64));
    }

    #[test]
    fn stored_asset_is_read_back() {
        let root = temp_cache("roundtrip");
        store_cached_asset(&root, "https://example.org/img", b"bytes");
        assert_eq!(
            load_cached_asset(&root, "https://example.org/img").as_deref(),
            Some(&b"bytes"[..])
        );
        assert!(load_cached_asset(&root, "https://example.org/other").is_none());
        let _ = fs::remove_dir_all(&root);
    }
}
