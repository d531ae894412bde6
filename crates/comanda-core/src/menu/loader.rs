//! Plain-text menu parsing.
//!
//! A structurally significant line has the shape
//! `<name>: ... $<price> ... [<image-ref>]` where the image reference is
//! either a path with a known image extension or the `no-image` sentinel.
//! All other lines are ignored by the structured view but kept verbatim
//! in the raw text, since the prompt embeds the whole file.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use comanda_types::menu::{Menu, MenuEntry, NO_IMAGE_SENTINEL};

/// File extensions recognized as image references inside brackets.
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Greedy `.*` before the price and tag makes the last `$<digits>`
        // and the last bracket pair on the line the significant ones.
        Regex::new(r"^\s*(?P<name>[^:\[\]]+?)\s*:.*\$(?P<price>\d+).*\[(?P<image>[^\[\]]+)\]")
            .expect("menu line pattern is valid")
    })
}

/// Whether a bracketed token is a valid image reference.
///
/// Accepts the `no-image` sentinel and paths ending in a known image
/// extension. The same recognizer backs both the menu loader and the
/// reply segmenter, so a tag the prompt teaches the model is exactly a
/// tag the renderer understands.
pub(crate) fn is_image_ref(token: &str) -> bool {
    if token == NO_IMAGE_SENTINEL {
        return true;
    }
    token
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Parse menu text into its structured view.
///
/// The raw text is retained verbatim. Duplicate image references across
/// dishes resolve last-occurrence-wins in the index; this may be a
/// menu-authoring bug, so it is logged rather than silently absorbed.
pub fn parse_menu(text: &str) -> Menu {
    let mut menu = Menu {
        raw: text.to_string(),
        ..Menu::default()
    };

    for line in text.lines() {
        let Some(caps) = line_pattern().captures(line) else {
            continue;
        };

        let name = caps["name"].trim();
        if name.is_empty() {
            continue;
        }
        let image = &caps["image"];
        if !is_image_ref(image) {
            continue;
        }
        // The pattern guarantees digits; clamp absurd prices instead of failing.
        let price: u32 = caps["price"].parse().unwrap_or(u32::MAX);

        let entry = MenuEntry {
            name: name.to_string(),
            price,
            image: (image != NO_IMAGE_SENTINEL).then(|| image.to_string()),
        };

        if let Some(image_ref) = &entry.image {
            if let Some(previous) = menu
                .image_index
                .insert(image_ref.clone(), entry.name.clone())
            {
                warn!(
                    image = %image_ref,
                    previous = %previous,
                    now = %entry.name,
                    "duplicate image reference in menu; keeping the later dish"
                );
            }
        }
        menu.entries.push(entry);
    }

    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = "\
=== LA COCINA DE PEDRO ===

Agua: refrescante, $1 [imagenes/agua.png]
Tacos al pastor: tres piezas, $5 [imagenes/tacos.png]
Sopa del dia: pregunta al mesero, $3 [no-image]
Promocion: 2x1 en tacos los martes
";

    #[test]
    fn test_raw_text_retained_verbatim() {
        let menu = parse_menu(MENU);
        assert_eq!(menu.raw, MENU);
    }

    #[test]
    fn test_entries_parsed_in_order() {
        let menu = parse_menu(MENU);
        assert_eq!(menu.entries.len(), 3);
        assert_eq!(menu.entries[0].name, "Agua");
        assert_eq!(menu.entries[0].price, 1);
        assert_eq!(
            menu.entries[0].image.as_deref(),
            Some("imagenes/agua.png")
        );
        assert_eq!(menu.entries[2].name, "Sopa del dia");
        assert_eq!(menu.entries[2].image, None);
    }

    #[test]
    fn test_sentinel_excluded_from_index() {
        let menu = parse_menu(MENU);
        assert_eq!(menu.image_index.len(), 2);
        assert!(!menu.image_index.values().any(|name| name == "Sopa del dia"));
    }

    #[test]
    fn test_every_non_sentinel_match_appears_once() {
        let menu = parse_menu(MENU);
        assert_eq!(
            menu.dish_for_image("imagenes/agua.png"),
            Some("Agua")
        );
        assert_eq!(
            menu.dish_for_image("imagenes/tacos.png"),
            Some("Tacos al pastor")
        );
    }

    #[test]
    fn test_duplicate_image_last_occurrence_wins() {
        let text = "\
Agua: $1 [imagenes/bebida.png]
Refresco: $2 [imagenes/bebida.png]
";
        let menu = parse_menu(text);
        assert_eq!(menu.image_index.len(), 1);
        assert_eq!(
            menu.dish_for_image("imagenes/bebida.png"),
            Some("Refresco")
        );
    }

    #[test]
    fn test_free_text_lines_ignored_by_index() {
        let menu = parse_menu("Promocion: 2x1 en tacos los martes\n");
        assert!(menu.entries.is_empty());
        assert!(menu.image_index.is_empty());
    }

    #[test]
    fn test_bracket_without_image_extension_not_a_dish_line() {
        let menu = parse_menu("Combo: $9 [ver mesero]\n");
        assert!(menu.entries.is_empty());
    }

    #[test]
    fn test_extension_case_insensitive() {
        let menu = parse_menu("Flan: $2 [imagenes/FLAN.PNG]\n");
        assert_eq!(menu.entries.len(), 1);
        assert_eq!(menu.dish_for_image("imagenes/FLAN.PNG"), Some("Flan"));
    }

    #[test]
    fn test_empty_input() {
        let menu = parse_menu("");
        assert!(menu.raw.is_empty());
        assert!(menu.entries.is_empty());
    }
}
