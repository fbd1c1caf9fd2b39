//! JSON dump of the parsed cards.

use super::CardRenderer;
use crate::card::Card;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl CardRenderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, cards: &[Card]) -> String {
        // Cards hold only strings, integers, booleans and enums, so serializing
        // them cannot fail.
        serde_json::to_string_pretty(cards).expect("cards always serialize to JSON")
    }
}
