//! Markdown parser for card files.
//!
//! # Format
//! ```markdown
//! # Capital {QUESTION}
//! What is the capital of France?
//!
//! Paris
//!
//! # Pick one {CHOICE}
//! [x] Correct
//! [ ] Wrong
//!
//! # Plain card
//! - a bullet
//! 1. a numbered item
//! ```
//!
//! A level-1 heading starts a card. Lines before the first one are ignored.

use crate::card::Card;
use crate::inline::{format_inline, resolve_links};
use crate::types::{CardKind, ChoiceOption, ContentBlock, ElementTag, Heading, ParsedCard, RawCard};

const CARD_HEADING_PREFIX: &str = "# ";
const WRONG_ANSWER_PREFIX: &str = "[ ] ";
const RIGHT_ANSWER_PREFIX: &str = "[x] ";

/// Parse markdown content into cards.
pub fn parse(content: &str) -> Vec<Card> {
    if content.trim().is_empty() {
        return vec![];
    }

    let segments = split_into_cards(content);
    tracing::debug!(segments = segments.len(), "split document into card segments");

    let cards: Vec<Card> = segments
        .into_iter()
        .map(resolve_kind)
        .map(|raw| parse_blocks(&raw))
        .map(|parsed| parsed.map_text(format_inline))
        .map(|parsed| parsed.map_text(resolve_links))
        .map(build_card)
        .collect();

    tracing::debug!(cards = cards.len(), "parsed card document");
    cards
}

/// Classify a single line. Checks run in order and the first match wins.
pub fn classify_line(line: &str) -> ElementTag {
    if is_heading(line) {
        ElementTag::Heading
    } else if is_bullet_item(line) {
        ElementTag::BulletList
    } else if ordered_item_text(line).is_some() {
        ElementTag::OrderedList
    } else if line.starts_with(WRONG_ANSWER_PREFIX) {
        ElementTag::WrongAnswer
    } else if line.starts_with(RIGHT_ANSWER_PREFIX) {
        ElementTag::RightAnswer
    } else if line.is_empty() {
        ElementTag::EmptyLine
    } else {
        ElementTag::TextBlock
    }
}

fn is_heading(line: &str) -> bool {
    let rest = line.trim_start_matches('#');
    rest.len() < line.len() && rest.starts_with(' ')
}

fn is_bullet_item(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(chars.next(), Some('-' | '*' | '+')) && chars.next() == Some(' ')
}

/// Text of an ordered list item (`12. text`), or None if the line is not one.
fn ordered_item_text(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest.strip_prefix(". ")
}

/// Split a document into raw card segments at level-1 headings.
pub fn split_into_cards(content: &str) -> Vec<RawCard> {
    let mut cards = Vec::new();
    let mut current: Option<RawCard> = None;

    for line in content.lines() {
        if line.starts_with(CARD_HEADING_PREFIX) {
            if let Some(card) = current.take() {
                cards.push(card);
            }
            current = Some(RawCard {
                lines: vec![line.to_string()],
                kind: CardKind::None,
            });
        } else if let Some(ref mut card) = current {
            card.lines.push(line.to_string());
        }
    }

    if let Some(card) = current {
        cards.push(card);
    }

    cards
}

/// Read the kind marker off a segment's heading line and strip it.
pub fn resolve_kind(mut raw: RawCard) -> RawCard {
    if raw.lines.is_empty() {
        return raw;
    }

    let mut heading = raw.lines[0].trim_end().to_string();
    for kind in [CardKind::Question, CardKind::Choice] {
        let Some(marker) = kind.marker() else {
            continue;
        };
        if let Some(stripped) = heading.strip_suffix(marker) {
            heading = stripped.to_string();
            raw.kind = kind;
            break;
        }
    }

    raw.lines[0] = heading;
    raw
}

/// Parse a heading line into a Heading block.
///
/// A trailing `{...}` is removed from the text and kept as the heading's tag.
/// The tag starts at the last `{`, so braces earlier in the text are kept.
pub fn parse_heading(line: &str) -> Heading {
    let level = line.chars().take_while(|&c| c == '#').count();
    let text = line
        .split_once(' ')
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default();

    if text.ends_with('}') {
        if let Some(start) = text.rfind('{') {
            let tag = &text[start + 1..text.len() - 1];
            return Heading::new(level, tag, text[..start].trim_end());
        }
    }

    Heading::new(level, "", text)
}

/// Group a kind-resolved segment's lines into content blocks.
pub fn parse_blocks(raw: &RawCard) -> ParsedCard {
    let lines = &raw.lines;
    let heading = lines
        .first()
        .map(|line| parse_heading(line))
        .unwrap_or_else(|| Heading::new(1, "", ""));

    let mut blocks = Vec::new();
    let mut idx = 1;

    while idx < lines.len() {
        let line = lines[idx].as_str();
        match classify_line(line) {
            ElementTag::Heading => {
                blocks.push(ContentBlock::Heading(parse_heading(line)));
                idx += 1;
            }
            ElementTag::BulletList => {
                let items = take_run(lines, &mut idx, ElementTag::BulletList, |item| {
                    item[2..].to_string()
                });
                blocks.push(ContentBlock::BulletList { items });
            }
            ElementTag::OrderedList => {
                let items = take_run(lines, &mut idx, ElementTag::OrderedList, |item| {
                    ordered_item_text(item).unwrap_or_default().to_string()
                });
                blocks.push(ContentBlock::OrderedList { items });
            }
            ElementTag::WrongAnswer => {
                let text = &line[WRONG_ANSWER_PREFIX.len()..];
                blocks.push(ContentBlock::Choice(ChoiceOption::new(false, text)));
                idx += 1;
            }
            ElementTag::RightAnswer => {
                let text = &line[RIGHT_ANSWER_PREFIX.len()..];
                blocks.push(ContentBlock::Choice(ChoiceOption::new(true, text)));
                idx += 1;
            }
            ElementTag::EmptyLine => idx += 1,
            ElementTag::TextBlock => {
                let lines = take_run(lines, &mut idx, ElementTag::TextBlock, str::to_string);
                blocks.push(ContentBlock::TextBlock { lines });
            }
        }
    }

    ParsedCard {
        heading,
        blocks,
        kind: raw.kind,
    }
}

/// Consume the run of lines starting at `idx` that classify as `tag`.
fn take_run<F>(lines: &[String], idx: &mut usize, tag: ElementTag, item: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let mut items = Vec::new();
    while *idx < lines.len() && classify_line(&lines[*idx]) == tag {
        items.push(item(&lines[*idx]));
        *idx += 1;
    }
    items
}

/// Partition a question card's blocks into its front and back sides.
///
/// A sub-heading tagged `{FRONT}` or `{BACK}` switches the side it and the
/// following blocks land on. Without any such marker the first block is the
/// front and the rest is the back.
pub fn split_front_back(blocks: Vec<ContentBlock>) -> (Vec<ContentBlock>, Vec<ContentBlock>) {
    let has_marker = blocks.iter().any(|block| side_marker(block).is_some());
    if !has_marker {
        let mut front = blocks;
        let back = if front.is_empty() { vec![] } else { front.split_off(1) };
        return (front, back);
    }

    let mut front = Vec::new();
    let mut back = Vec::new();
    let mut is_front = true;

    for block in blocks {
        if let Some(side) = side_marker(&block) {
            is_front = side == Side::Front;
        }
        if is_front {
            front.push(block);
        } else {
            back.push(block);
        }
    }

    (front, back)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Front,
    Back,
}

// The heading parser has already moved `{FRONT}` / `{BACK}` into the tag,
// so the marker is read from there rather than from the rendered text.
fn side_marker(block: &ContentBlock) -> Option<Side> {
    match block.as_heading()?.tag.as_str() {
        "FRONT" => Some(Side::Front),
        "BACK" => Some(Side::Back),
        _ => None,
    }
}

/// Build the card variant selected by the segment's kind.
pub fn build_card(parsed: ParsedCard) -> Card {
    let ParsedCard {
        heading,
        blocks,
        kind,
    } = parsed;

    tracing::trace!(?kind, heading = %heading.text, blocks = blocks.len(), "building card");

    match kind {
        CardKind::None => Card::Simple {
            heading,
            back: blocks,
        },
        CardKind::Question => {
            let (front, back) = split_front_back(blocks);
            Card::Question {
                heading,
                front,
                back,
            }
        }
        CardKind::Choice => Card::Choice { heading, blocks },
    }
}
