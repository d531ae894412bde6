//! Menu types for Comanda.
//!
//! The menu is a human-authored plain-text file. Lines matching
//! `<name>: ... $<price> ... [<image-ref>]` are structurally significant;
//! everything else is free text that still travels verbatim into the
//! system prompt.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marker meaning "no illustrative image for this entry".
///
/// Entries tagged `[no-image]` are parsed like any other line but never
/// enter the image index, and the renderer drops the tag entirely.
pub const NO_IMAGE_SENTINEL: &str = "no-image";

/// A single parsed dish line from the menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Dish name, non-empty after trimming.
    pub name: String,
    /// Whole-unit price as written after the `$` sign.
    pub price: u32,
    /// Image reference for this dish; `None` for the `no-image` sentinel.
    pub image: Option<String>,
}

/// The loaded menu: verbatim text plus the structured view of it.
///
/// Built once at startup by the loader and immutable afterward. The raw
/// text is what the prompt composer embeds; the image index is only used
/// to label rendered images and UI controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    /// Full file contents, including lines the recognizer ignored.
    pub raw: String,
    /// Dish lines in file order.
    pub entries: Vec<MenuEntry>,
    /// Image reference -> dish name. Sentinel entries are excluded;
    /// duplicate references resolve last-occurrence-wins.
    pub image_index: BTreeMap<String, String>,
}

impl Menu {
    /// Look up the dish name for an image reference.
    pub fn dish_for_image(&self, image_ref: &str) -> Option<&str> {
        self.image_index.get(image_ref).map(String::as_str)
    }

    /// All image references in index order, e.g. for gallery shortcuts.
    pub fn image_refs(&self) -> impl Iterator<Item = &str> {
        self.image_index.keys().map(String::as_str)
    }
}
