//! Reply decomposition for rendering.
//!
//! Assistant replies interleave prose with bracketed image tags (the
//! protocol agreed between the system prompt and the renderer). This
//! module splits a reply into typed segments, coalesces text runs, and
//! groups consecutive images into gallery blocks with a pluggable
//! layout policy. Filesystem existence checks happen at render time in
//! the presentation layer, not here.

pub mod layout;
pub mod segment;

pub use layout::{GalleryLayout, GridLayout, RenderBlock, group_blocks};
pub use segment::{Segment, coalesce, split_segments};
