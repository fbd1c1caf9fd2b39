//! Renderers that turn parsed cards into study-tool documents.

pub mod anki;
pub mod html;
pub mod json;
pub mod text;

use crate::card::Card;
use crate::types::ContentBlock;

/// Options shared by all renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `lang` attribute of the HTML document.
    pub html_lang: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            html_lang: "en".to_string(),
        }
    }
}

/// Trait for card document renderers.
pub trait CardRenderer: Send + Sync {
    /// Renderer identifier, also used as the format name.
    fn name(&self) -> &'static str;

    /// Render the full document for a list of cards.
    fn render(&self, cards: &[Card]) -> String;
}

/// Names accepted by [`get_renderer`].
pub const RENDERER_NAMES: [&str; 4] = ["html", "anki", "json", "text"];

/// Get renderer by name.
pub fn get_renderer(name: &str, options: &RenderOptions) -> Option<Box<dyn CardRenderer>> {
    match name {
        "html" => Some(Box::new(html::HtmlRenderer::new(options.html_lang.clone()))),
        "anki" => Some(Box::new(anki::AnkiRenderer)),
        "json" => Some(Box::new(json::JsonRenderer)),
        "text" => Some(Box::new(text::TextRenderer)),
        _ => None,
    }
}

/// Sequential ids for choice checkboxes, scoped to one render call.
#[derive(Debug)]
pub struct ChoiceIds {
    next: usize,
}

impl ChoiceIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for ChoiceIds {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML lines for one content block.
pub fn block_markup(block: &ContentBlock, ids: &mut ChoiceIds) -> Vec<String> {
    match block {
        ContentBlock::Heading(heading) => vec![format!(
            "<h{level}>{}</h{level}>",
            heading.text,
            level = heading.level
        )],
        ContentBlock::TextBlock { lines } => match lines.split_last() {
            None => vec!["<p></p>".to_string()],
            Some((last, rest)) => {
                let mut out = Vec::with_capacity(lines.len() + 2);
                out.push("<p>".to_string());
                out.extend(rest.iter().map(|line| format!("{}<br>", line)));
                out.push(last.clone());
                out.push("</p>".to_string());
                out
            }
        },
        ContentBlock::BulletList { items } => {
            let mut out = vec!["<ul>".to_string()];
            out.extend(items.iter().map(|item| format!("  <li>{}</li>", item)));
            out.push("</ul>".to_string());
            out
        }
        ContentBlock::OrderedList { items } => {
            let mut out = vec!["<ol>".to_string()];
            out.extend(items.iter().map(|item| format!("<li>{}</li>", item)));
            out.push("</ol>".to_string());
            out
        }
        ContentBlock::Choice(option) => {
            let id = ids.next_id();
            vec![
                format!("<input type=\"checkbox\" id=\"cElem{}\">", id),
                format!("<label for=\"cElem{}\"> {}</label><br>", id, option.text()),
            ]
        }
    }
}

/// Markup of a card's front side (heading first) and back side.
pub fn card_sides(card: &Card, ids: &mut ChoiceIds) -> (Vec<String>, Vec<String>) {
    let heading = ContentBlock::Heading(card.heading().clone());
    let mut front = block_markup(&heading, ids);
    for block in card.front_blocks() {
        front.extend(block_markup(block, ids));
    }

    let mut back = Vec::new();
    for block in card.back_blocks() {
        back.extend(block_markup(block, ids));
    }

    (front, back)
}
