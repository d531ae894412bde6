//! Gallery grouping and layout policies.
//!
//! Consecutive image segments in one message form a single logical
//! gallery regardless of the text around them. How a gallery maps onto
//! rows is a presentation decision, so it goes through the
//! `GalleryLayout` trait rather than a hardcoded column count.

use super::segment::{Segment, coalesce};

/// A display block: a run of prose or one gallery of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    Text(String),
    Gallery(Vec<String>),
}

/// Group coalesced segments into display blocks.
///
/// Adjacent text segments are coalesced first; consecutive images become
/// one gallery block.
pub fn group_blocks(segments: Vec<Segment>) -> Vec<RenderBlock> {
    let mut blocks: Vec<RenderBlock> = Vec::new();
    for segment in coalesce(segments) {
        match (blocks.last_mut(), segment) {
            (Some(RenderBlock::Gallery(images)), Segment::Image(image)) => images.push(image),
            (_, Segment::Image(image)) => blocks.push(RenderBlock::Gallery(vec![image])),
            (_, Segment::Text(text)) => blocks.push(RenderBlock::Text(text)),
        }
    }
    blocks
}

/// Strategy for arranging a gallery's images into rows.
pub trait GalleryLayout {
    fn arrange<'a>(&self, images: &'a [String]) -> Vec<&'a [String]>;
}

/// Fixed-width grid: a bounded number of columns, wrapping to rows.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    columns: usize,
}

impl GridLayout {
    /// A grid with the given column count (floored at 1).
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl GalleryLayout for GridLayout {
    fn arrange<'a>(&self, images: &'a [String]) -> Vec<&'a [String]> {
        images.chunks(self.columns).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(s: &str) -> Segment {
        Segment::Image(s.to_string())
    }

    fn txt(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn test_consecutive_images_become_one_gallery() {
        let blocks = group_blocks(vec![img("a.png"), img("b.png"), txt(" text")]);
        assert_eq!(
            blocks,
            vec![
                RenderBlock::Gallery(vec!["a.png".to_string(), "b.png".to_string()]),
                RenderBlock::Text(" text".to_string()),
            ]
        );
    }

    #[test]
    fn test_text_between_images_splits_galleries() {
        let blocks = group_blocks(vec![img("a.png"), txt("y"), img("b.png")]);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[0], RenderBlock::Gallery(g) if g.len() == 1));
        assert!(matches!(&blocks[2], RenderBlock::Gallery(g) if g.len() == 1));
    }

    #[test]
    fn test_adjacent_text_coalesced_before_grouping() {
        let blocks = group_blocks(vec![txt("a"), txt("b")]);
        assert_eq!(blocks, vec![RenderBlock::Text("ab".to_string())]);
    }

    #[test]
    fn test_grid_wraps_to_rows() {
        let images: Vec<String> = (0..7).map(|i| format!("{i}.png")).collect();
        let rows = GridLayout::new(3).arrange(&images);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(rows[2].len(), 1);
    }

    #[test]
    fn test_grid_floors_columns_at_one() {
        let images = vec!["a.png".to_string(), "b.png".to_string()];
        let rows = GridLayout::new(0).arrange(&images);
        assert_eq!(rows.len(), 2);
    }
}
