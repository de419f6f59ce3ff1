use crate::assets::LoadedAsset;
use iced::widget::image::Handle;
use std::collections::HashMap;
use zine_core::Extent;

#[derive(Debug, Clone)]
pub enum AssetSlot {
    Loading,
    Ready { handle: Handle, extent: Extent },
    Failed(String),
}

/// Images keyed by their source string.
#[derive(Debug, Default)]
pub struct AssetStore {
    slots: HashMap<String, AssetSlot>,
}

impl AssetStore {
    pub(in crate::app) fn get(&self, source: &str) -> Option<&AssetSlot> {
        self.slots.get(source)
    }

    /// Mark `source` as loading; returns `false` when it is already known.
    pub(in crate::app) fn begin(&mut self, source: &str) -> bool {
        if self.slots.contains_key(source) {
            return false;
        }
        self.slots.insert(source.to_string(), AssetSlot::Loading);
        true
    }

    pub(in crate::app) fn finish(
        &mut self,
        source: String,
        result: Result<LoadedAsset, String>,
    ) -> &AssetSlot {
        let slot = match result {
            Ok(asset) => AssetSlot::Ready {
                extent: Extent::new(asset.width as f32, asset.height as f32),
                handle: Handle::from_bytes(asset.bytes),
            },
            Err(reason) => AssetSlot::Failed(reason),
        };
        let entry = self.slots.entry(source).or_insert(AssetSlot::Loading);
        *entry = slot;
        entry
    }

    pub(in crate::app) fn clear(&mut self) {
        self.slots.clear();
    }
}
