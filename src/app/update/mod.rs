mod core;
mod interaction;
mod navigation;
mod scroll;
mod zoom;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    LoadAsset(String),
    OpenLink(String),
    ReloadContent,
    Quit,
}
