//! Anki plain-text import file.
//!
//! # Format
//! ```text
//! #separator:Semicolon
//! #html:true
//! #columns:Front;Back
//! #notetype:Basic
//!
//! "<h1>Title</h1>";"<p>back</p>"
//! ```

use super::{card_sides, CardRenderer, ChoiceIds};
use crate::card::Card;

const HEADER: [&str; 4] = [
    "#separator:Semicolon",
    "#html:true",
    "#columns:Front;Back",
    "#notetype:Basic",
];

/// Renders one quoted `"front";"back"` record per card.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnkiRenderer;

impl CardRenderer for AnkiRenderer {
    fn name(&self) -> &'static str {
        "anki"
    }

    fn render(&self, cards: &[Card]) -> String {
        let mut ids = ChoiceIds::new();
        let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();
        lines.push(String::new());

        for card in cards {
            let (front, back) = card_sides(card, &mut ids);
            lines.push(format!("{};{}", quote_field(&front.concat()), quote_field(&back.concat())));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
