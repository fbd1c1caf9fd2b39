//! Console summary of the parsed cards.

use super::CardRenderer;
use crate::card::Card;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl CardRenderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, cards: &[Card]) -> String {
        let mut out: String = cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        out.push('\n');
        out
    }
}
