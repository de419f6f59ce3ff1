use crate::assets::LoadedAsset;
use iced::keyboard::{Key, Modifiers};
use iced::mouse::ScrollDelta;
use std::time::Instant;
use zine_core::{CursorShape, Zine};

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    WheelScrolled(ScrollDelta),
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
    /// Scroll by a pixel delta (keyboard scrolling).
    ScrollBy(f32),
    /// Smooth-scroll to a section (0 is the intro).
    NavigateTo(usize),
    NextSection,
    PreviousSection,
    FirstSection,
    LastSection,
    ToggleToc,
    CloseToc,
    SelectTocEntry(usize),
    FlipSpread(usize),
    Interact(usize),
    OpenZoom(usize),
    ZoomIn,
    ZoomOut,
    RotateZoom,
    CloseZoom,
    ZoomBackdropClicked,
    ZoomDragStarted,
    CursorMoved {
        x: f32,
        y: f32,
    },
    CursorLeft,
    PointerReleased,
    SetCursorShape(CursorShape),
    DismissNotice,
    EscapePressed,
    AssetLoaded {
        source: String,
        result: Result<LoadedAsset, String>,
    },
    LinkOpened {
        url: String,
        error: Option<String>,
    },
    ContentLoaded(Result<Zine, String>),
    RetryContent,
    Quit,
}
