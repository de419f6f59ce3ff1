//! Zine content: the ordered spreads and where they come from.
//!
//! Content is read once at startup, either from a TOML file (`[[spread]]`
//! tables), a JSON file (an array of spreads), or the built-in zine that
//! ships with the crate. It is read-only afterwards.

use crate::error::{Result, ZineError};
use crate::flash::{DEFAULT_FLASH_PALETTE, Rgba};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const BUILTIN_ZINE: &str = include_str!("../assets/default_zine.toml");
const DEFAULT_BACK_TITLE: &str = "Additional Notes";
const DEFAULT_BACK_CONTENT: &str = "No additional content available.";

/// Side effect attached to a spread's extra button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InteractiveAction {
    /// Show a modal message.
    Alert { message: String },
    /// Flash the screen with a random colour from the palette.
    Flash {
        #[serde(default = "default_palette")]
        palette: Vec<String>,
    },
    /// Open a link in the system browser.
    OpenLink { url: String },
}

fn default_palette() -> Vec<String> {
    DEFAULT_FLASH_PALETTE.iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interactive {
    pub button_text: String,
    pub action: InteractiveAction,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Spread {
    pub title: String,
    /// HTML fragment.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub back_title: Option<String>,
    #[serde(default)]
    pub back_content: Option<String>,
    #[serde(default)]
    pub interactive: Option<Interactive>,
}

impl Spread {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Title for listings; untitled spreads are numbered from 1.
    pub fn display_title(&self, index: usize) -> String {
        if self.title.trim().is_empty() {
            format!("Spread {}", index + 1)
        } else {
            self.title.clone()
        }
    }

    pub fn back_title(&self) -> &str {
        self.back_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_BACK_TITLE)
    }

    pub fn back_content(&self) -> &str {
        self.back_content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_BACK_CONTENT)
    }

    pub fn image_source(&self) -> Option<&str> {
        Some(self.image.trim()).filter(|s| !s.is_empty())
    }

    pub fn background_source(&self) -> Option<&str> {
        Some(self.background_image.trim()).filter(|s| !s.is_empty())
    }

    fn validate(&self, index: usize) -> Result<()> {
        let Some(interactive) = &self.interactive else {
            return Ok(());
        };
        if interactive.button_text.trim().is_empty() {
            return Err(ZineError::invalid_spread(
                index,
                "interactive button text is empty",
            ));
        }
        match &interactive.action {
            InteractiveAction::Alert { .. } => {}
            InteractiveAction::Flash { palette } => {
                if palette.is_empty() {
                    return Err(ZineError::invalid_spread(index, "flash palette is empty"));
                }
                for color in palette {
                    Rgba::parse_hex(color).map_err(|err| {
                        ZineError::invalid_spread(index, format!("flash palette: {err}"))
                    })?;
                }
            }
            InteractiveAction::OpenLink { url } => {
                let url = url.trim();
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(ZineError::invalid_spread(
                        index,
                        format!("link must be http(s): {url:?}"),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Render an HTML fragment as wrapped plain text.
pub fn plain_text(html: &str, width: usize) -> String {
    match html2text::from_read(html.as_bytes(), width.max(10)) {
        Ok(text) => text.trim().to_string(),
        Err(err) => {
            warn!("html2text failed: {err}");
            html.trim().to_string()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ZineFile {
    #[serde(default, rename = "spread")]
    spreads: Vec<Spread>,
}

/// The ordered spreads of one zine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zine {
    spreads: Vec<Spread>,
}

impl Zine {
    pub fn new(spreads: Vec<Spread>) -> Self {
        Self { spreads }
    }

    /// The zine bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::parse_toml(BUILTIN_ZINE)
    }

    pub fn parse_toml(contents: &str) -> Result<Self> {
        let file: ZineFile = toml::from_str(contents)?;
        Self::validated(file.spreads)
    }

    pub fn parse_json(contents: &str) -> Result<Self> {
        let spreads: Vec<Spread> = serde_json::from_str(contents)?;
        Self::validated(spreads)
    }

    /// Load from `path`, picking the format from the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ZineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let zine = match extension.as_str() {
            "toml" => Self::parse_toml(&contents)?,
            "json" => Self::parse_json(&contents)?,
            other => return Err(ZineError::UnsupportedFormat(other.to_string())),
        };
        info!(
            path = %path.display(),
            spreads = zine.len(),
            "Loaded zine content"
        );
        Ok(zine)
    }

    fn validated(spreads: Vec<Spread>) -> Result<Self> {
        for (index, spread) in spreads.iter().enumerate() {
            spread.validate(index)?;
        }
        debug!(spreads = spreads.len(), "Validated zine content");
        Ok(Self { spreads })
    }

    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    pub fn get(&self, index: usize) -> Option<&Spread> {
        self.spreads.get(index)
    }

    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    /// Every distinct image and background source, in reading order.
    pub fn asset_sources(&self) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        for spread in &self.spreads {
            for source in [spread.background_source(), spread.image_source()]
                .into_iter()
                .flatten()
            {
                if !sources.iter().any(|s| s == source) {
                    sources.push(source.to_string());
                }
            }
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_zine_parses() {
        let zine = Zine::builtin().unwrap();
        assert_eq!(zine.len(), 4);
        assert_eq!(zine.spreads()[0].title, "The Beginning");
        assert!(matches!(
            zine.spreads()[2].interactive.as_ref().map(|i| &i.action),
            Some(InteractiveAction::Flash { .. })
        ));
        assert!(matches!(
            zine.spreads()[3].interactive.as_ref().map(|i| &i.action),
            Some(InteractiveAction::OpenLink { .. })
        ));
        assert_eq!(zine.asset_sources().len(), 8);
    }

    #[test]
    fn missing_back_side_uses_defaults() {
        let zine = Zine::builtin().unwrap();
        let spread = &zine.spreads()[2];
        assert_eq!(spread.back_title(), "Additional Notes");
        assert_eq!(spread.back_content(), "No additional content available.");
    }

    #[test]
    fn parses_json_array() {
        let zine = Zine::parse_json(
            r#"[{"title": "One", "interactive": {"button_text": "Go",
                "action": {"kind": "flash"}}}]"#,
        )
        .unwrap();
        let Some(Interactive {
            action: InteractiveAction::Flash { palette },
            ..
        }) = &zine.spreads()[0].interactive
        else {
            panic!("expected flash action");
        };
        assert_eq!(palette.len(), 5);
    }

    #[test]
    fn rejects_bad_palette() {
        let err = Zine::parse_toml(
            r#"
            [[spread]]
            title = "Bad"
            [spread.interactive]
            button_text = "Flash"
            action = { kind = "flash", palette = ["not-a-colour"] }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ZineError::InvalidSpread { index: 0, .. }));
    }

    #[test]
    fn rejects_non_http_links() {
        let err = Zine::parse_toml(
            r#"
            [[spread]]
            title = "Link"
            [spread.interactive]
            button_text = "Open"
            action = { kind = "open-link", url = "file:///etc/passwd" }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ZineError::InvalidSpread { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = std::env::temp_dir().join(format!("zine-core-test-{}.yaml", std::process::id()));
        fs::write(&path, "spread: []").unwrap();
        let err = Zine::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ZineError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn plain_text_strips_markup() {
        let text = plain_text("<p>Hello <b>zine</b></p><p>Second</p>", 80);
        assert!(text.contains("Hello"));
        assert!(text.contains("Second"));
        assert!(!text.contains("<p>"));
    }
}
