//! Scroll-driven zine model.
//!
//! Everything here is independent of the rendering host: the app feeds in
//! scroll geometry, pointer positions and clicks, and reads back section
//! indices, opacities, offsets and transforms to draw.

pub mod content;
pub mod cursor;
pub mod error;
pub mod flash;
pub mod flip;
pub mod interaction;
pub mod interpolate;
pub mod navigator;
pub mod overlay;
pub mod progress;
pub mod section;
pub mod visibility;
pub mod zoom;

pub use content::{Interactive, InteractiveAction, Spread, Zine, plain_text};
pub use cursor::{CursorEffect, CursorShape};
pub use error::{Result, ZineError};
pub use flash::{ColorFlash, Rgba};
pub use flip::{Face, FlipBook};
pub use interaction::InteractionHost;
pub use interpolate::interpolate;
pub use navigator::{ScrollNavigator, SmoothScroll};
pub use overlay::{Notice, TableOfContents, TocEntry};
pub use progress::{ScrollProgressTracker, ScrollState};
pub use section::{RegularBins, SectionLayout, SectionMapper, SectionStrategy, TailSplit};
pub use visibility::{HeroTransform, SpreadVisual, VisibilityProfile};
pub use zoom::{Extent, ImageStatus, Pan, ZoomSession, ZoomViewer};
