//! System prompt composition.
//!
//! The prompt is the only place the ordering policy lives: role
//! restriction, refusal wording, format fidelity, and the gallery rule
//! are natural-language instructions to the remote model, not invariants
//! this code can enforce. Tests can assert the template mechanics (menu
//! embedded, markers present) but never model compliance.

/// Fixed instruction template; `{menu}` is replaced with the verbatim
/// menu text at composition time.
const SYSTEM_TEMPLATE: &str = "\
You are the order-taking assistant of a small restaurant. Your only job \
is to take food and drink orders from the menu below and answer questions \
about it.

Rules:
- Only discuss the menu and the customer's order. If the customer asks \
about anything else, reply exactly: \"I can only help you with our menu \
and your order.\"
- Never alter a dish's displayed name or price. Quote them exactly as \
they appear in the menu, including the dollar sign.
- Dish lines in the menu carry an image tag in square brackets, for \
example [imagenes/agua.png]. When you mention a dish, keep its tag next \
to it so the interface can show the picture. The [no-image] tag means \
there is no picture.
- When the customer asks to \"show full menu\" or \"show promotions\", \
start your reply with all the relevant image tags together on one line, \
before any text.
- Be brief, friendly, and suggest one complementary item when the \
customer orders a main dish.
- When the customer confirms they are done, summarize the order with a \
total and tell them to use the confirm action to send it to the kitchen.

The menu:
---
{menu}
---";

/// Compose the final system instruction from the raw menu text.
///
/// Pure substitution; callers guarantee the menu was loaded (a missing
/// menu is fatal upstream, so an unusable prompt is never produced).
pub fn compose(menu_raw: &str) -> String {
    SYSTEM_TEMPLATE.replace("{menu}", menu_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_embedded_verbatim() {
        let menu = "Agua: $1 [imagenes/agua.png]\nTacos: $5 [imagenes/tacos.png]\n";
        let prompt = compose(menu);
        assert!(prompt.contains(menu));
        assert!(!prompt.contains("{menu}"));
    }

    #[test]
    fn test_policy_markers_present() {
        let prompt = compose("x");
        assert!(prompt.contains("show full menu"));
        assert!(prompt.contains("show promotions"));
        assert!(prompt.contains("[no-image]"));
    }
}
