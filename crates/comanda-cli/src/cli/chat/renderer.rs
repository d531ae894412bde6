//! Terminal rendering for assistant replies.
//!
//! During streaming, tokens are printed raw for immediate feedback.
//! Once the full reply is collected it is split on the image-tag
//! protocol: prose goes through `termimad`, and every gallery block is
//! resolved into rows of labeled image cards below the prose, with
//! missing files substituted by an inline notice. Transcript state is
//! never touched here.

use std::io::Write;
use std::path::Path;

use console::style;
use termimad::MadSkin;

use comanda_core::render::{GalleryLayout, GridLayout, RenderBlock, group_blocks, split_segments};
use comanda_types::menu::Menu;

/// Terminal renderer for the ordering conversation.
pub struct ChatRenderer {
    skin: MadSkin,
    layout: GridLayout,
}

impl ChatRenderer {
    /// Create a renderer with the given gallery column count.
    pub fn new(gallery_columns: usize) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            layout: GridLayout::new(gallery_columns),
        }
    }

    /// Print a single streaming token (raw, no formatting).
    pub fn print_streaming_token(&self, token: &str) {
        print!("{token}");
        let _ = std::io::stdout().flush();
    }

    /// Render a complete reply as formatted blocks.
    ///
    /// Used for non-streamed text such as transcript replay.
    pub fn render_final(&self, content: &str, menu: &Menu, image_dir: &Path) -> String {
        let mut output = String::new();
        for block in group_blocks(split_segments(content)) {
            match block {
                RenderBlock::Text(text) => {
                    let rendered = self.skin.term_text(text.trim());
                    output.push_str(&format!("{rendered}"));
                }
                RenderBlock::Gallery(images) => {
                    output.push_str(&self.format_gallery(&images, menu, image_dir));
                }
            }
        }
        output
    }

    /// Print the gallery blocks of a reply, skipping the prose.
    ///
    /// Called after streaming: the prose has already been printed token
    /// by token, so only the image tags still need resolving.
    pub fn print_galleries(&self, content: &str, menu: &Menu, image_dir: &Path) {
        for block in group_blocks(split_segments(content)) {
            if let RenderBlock::Gallery(images) = block {
                println!();
                print!("{}", self.format_gallery(&images, menu, image_dir));
            }
        }
    }

    /// Arrange one gallery into rows of labeled image cards.
    fn format_gallery(&self, images: &[String], menu: &Menu, image_dir: &Path) -> String {
        let mut output = String::new();
        for row in self.layout.arrange(images) {
            let cells: Vec<String> = row
                .iter()
                .map(|image| self.format_image_card(image, menu, image_dir))
                .collect();
            output.push_str(&format!("  {}\n", cells.join("  ")));
        }
        output
    }

    /// One image cell: dish label when the file exists, notice when not.
    fn format_image_card(&self, image: &str, menu: &Menu, image_dir: &Path) -> String {
        let label = menu.dish_for_image(image).unwrap_or(image);
        if image_dir.join(image).exists() {
            format!("{}", style(format!("[🖼 {label}]")).cyan())
        } else {
            format!("{}", style(format!("[{label}: image missing]")).yellow().dim())
        }
    }

    /// Print the stats footer after an assistant reply.
    pub fn print_stats_footer(&self, tokens: u32, response_ms: u64, model: &str) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "\n  {} {} tokens {} {:.1}s {} {}",
            style("|").dim(),
            style(tokens).dim(),
            style("\u{00b7}").dim(),
            style(seconds).dim(),
            style("\u{00b7}").dim(),
            style(model).dim(),
        );
    }
}
