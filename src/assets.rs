//! Image loading for spreads and the zoom overlay.
//!
//! Remote sources (`http://`, `https://`) are fetched with `reqwest` and
//! cached on disk; anything else is read as a local path. Bytes are only
//! accepted once `image` can read their dimensions.

use crate::cache::{load_cached_asset, store_cached_asset};
use anyhow::{Context, Result, anyhow};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Decoded-enough image: raw bytes plus natural size.
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub fn is_remote(source: &str) -> bool {
    let lower = source.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch `source`, preferring the disk cache for remote images.
pub async fn load_asset(source: String, cache_dir: PathBuf, allow_remote: bool) -> Result<LoadedAsset> {
    if is_remote(&source) {
        if let Some(bytes) = load_cached_asset(&cache_dir, &source) {
            if let Ok(asset) = inspect(bytes) {
                return Ok(asset);
            }
            debug!(%source, "Ignoring unreadable cached asset");
        }
        if !allow_remote {
            return Err(anyhow!("remote assets are disabled"));
        }
        let bytes = fetch_remote(&source).await?;
        let asset = inspect(bytes)?;
        store_cached_asset(&cache_dir, &source, &asset.bytes);
        info!(
            %source,
            width = asset.width,
            height = asset.height,
            "Fetched remote asset"
        );
        Ok(asset)
    } else {
        read_local(Path::new(source.trim()))
    }
}

fn read_local(path: &Path) -> Result<LoadedAsset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    inspect(bytes)
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Request failed for {url}"))?
        .error_for_status()
        .with_context(|| format!("Bad status for {url}"))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read body of {url}"))?;
    Ok(bytes.to_vec())
}

fn inspect(bytes: Vec<u8>) -> Result<LoadedAsset> {
    let (width, height) = image::ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .context("Failed to sniff image format")?
        .into_dimensions()
        .context("Unsupported or corrupt image")?;
    Ok(LoadedAsset {
        bytes,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbaImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn detects_remote_sources() {
        assert!(is_remote("https://images.example.org/a.jpg"));
        assert!(is_remote("  HTTP://example.org"));
        assert!(!is_remote("assets/cover.png"));
    }

    #[test]
    fn inspect_reads_dimensions() {
        let asset = inspect(png_bytes(3, 2)).unwrap();
        assert_eq!((asset.width, asset.height), (3, 2));
    }

    #[test]
    fn inspect_rejects_garbage() {
        assert!(inspect(b"not an image".to_vec()).is_err());
    }

    #[test]
    fn reads_local_images() {
        let path = std::env::temp_dir().join(format!("zine-viewer-local-{}.png", std::process::id()));
        std::fs::write(&path, png_bytes(4, 5)).unwrap();
        let asset = read_local(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((asset.width, asset.height), (4, 5));
        assert!(read_local(Path::new("/nonexistent/zine/cover.png")).is_err());
    }
}
