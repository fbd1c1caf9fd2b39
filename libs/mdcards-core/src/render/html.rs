//! Standalone HTML viewer document.

use super::{card_sides, CardRenderer, ChoiceIds};
use crate::card::Card;

/// Renders every card as a sequence of HTML blocks in one page.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    lang: String,
}

impl HtmlRenderer {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl CardRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, cards: &[Card]) -> String {
        let mut ids = ChoiceIds::new();
        let mut lines = vec![
            format!("<html lang=\"{}\">", self.lang),
            "<head>".to_string(),
            "  <meta http-equiv=\"content-type\" content=\"text/html\" charset=\"utf-8\">".to_string(),
            "</head>".to_string(),
            String::new(),
            "<body>".to_string(),
        ];

        for card in cards {
            let (front, back) = card_sides(card, &mut ids);
            lines.extend(front);
            lines.extend(back);
            lines.push("<br>".to_string());
        }

        lines.push("</body>".to_string());
        lines.push("</html>".to_string());

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
