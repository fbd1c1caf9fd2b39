//! Core types for card documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single source line or content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTag {
    Heading,
    TextBlock,
    BulletList,
    OrderedList,
    WrongAnswer,
    RightAnswer,
    EmptyLine,
}

/// Card kind, taken from the marker at the end of a level-1 heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    None,
    Question,
    Choice,
}

impl Default for CardKind {
    fn default() -> Self {
        Self::None
    }
}

impl CardKind {
    /// Heading suffix that selects this kind, if any.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Question => Some(" {QUESTION}"),
            Self::Choice => Some(" {CHOICE}"),
        }
    }
}

/// Heading block: the title of a card or a sub-heading inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: usize,
    /// Inner text of a trailing `{...}` tag, empty when there was none.
    pub tag: String,
    pub text: String,
}

impl Heading {
    pub fn new(level: usize, tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            tag: tag.into(),
            text: text.into(),
        }
    }

    pub fn map_text<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            text: f(self.text.as_str()),
            ..self
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level), self.text)
    }
}

/// One answer of a multiple choice card.
///
/// Correctness is fixed at construction; only the text can be rewritten,
/// and only by producing a new option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    is_correct: bool,
    text: String,
}

impl ChoiceOption {
    pub fn new(is_correct: bool, text: impl Into<String>) -> Self {
        Self {
            is_correct,
            text: text.into(),
        }
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn map_text<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            text: f(self.text.as_str()),
            is_correct: self.is_correct,
        }
    }
}

/// A classified, contiguous unit of card content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading(Heading),
    TextBlock { lines: Vec<String> },
    BulletList { items: Vec<String> },
    OrderedList { items: Vec<String> },
    Choice(ChoiceOption),
}

impl ContentBlock {
    /// Tag matching the line kind this block was parsed from.
    pub fn element_tag(&self) -> ElementTag {
        match self {
            Self::Heading(_) => ElementTag::Heading,
            Self::TextBlock { .. } => ElementTag::TextBlock,
            Self::BulletList { .. } => ElementTag::BulletList,
            Self::OrderedList { .. } => ElementTag::OrderedList,
            Self::Choice(option) if option.is_correct() => ElementTag::RightAnswer,
            Self::Choice(_) => ElementTag::WrongAnswer,
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Self::Heading(heading) => Some(heading),
            _ => None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }

    /// Rewrite every line of text in the block, keeping its shape.
    pub fn map_text<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        match self {
            Self::Heading(heading) => Self::Heading(heading.map_text(f)),
            Self::TextBlock { lines } => Self::TextBlock {
                lines: lines.iter().map(|line| f(line.as_str())).collect(),
            },
            Self::BulletList { items } => Self::BulletList {
                items: items.iter().map(|item| f(item.as_str())).collect(),
            },
            Self::OrderedList { items } => Self::OrderedList {
                items: items.iter().map(|item| f(item.as_str())).collect(),
            },
            Self::Choice(option) => Self::Choice(option.map_text(f)),
        }
    }
}

impl From<Heading> for ContentBlock {
    fn from(heading: Heading) -> Self {
        Self::Heading(heading)
    }
}

impl From<ChoiceOption> for ContentBlock {
    fn from(option: ChoiceOption) -> Self {
        Self::Choice(option)
    }
}

/// Canonical markdown form; list and text blocks re-parse to an equal block.
impl fmt::Display for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(heading) => write!(f, "{}", heading),
            Self::TextBlock { lines } => write!(f, "{}", lines.join("\n")),
            Self::BulletList { items } => {
                let lines: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Self::OrderedList { items } => {
                let lines: Vec<String> = items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| format!("{}. {}", idx + 1, item))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            Self::Choice(option) => {
                let marker = if option.is_correct() { "[x]" } else { "[ ]" };
                write!(f, "{} {}", marker, option.text())
            }
        }
    }
}

/// Raw segment of a document: the lines of one card, heading first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    pub lines: Vec<String>,
    pub kind: CardKind,
}

/// Segment after block parsing, before the card variant is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCard {
    pub heading: Heading,
    pub blocks: Vec<ContentBlock>,
    pub kind: CardKind,
}

impl ParsedCard {
    /// Apply a text rewrite to the heading and every block.
    pub fn map_text<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            heading: self.heading.map_text(&f),
            blocks: self.blocks.into_iter().map(|block| block.map_text(&f)).collect(),
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_display_drops_tag() {
        let heading = Heading::new(2, "BACK", "Answer");
        assert_eq!(heading.to_string(), "## Answer");
    }

    #[test]
    fn test_choice_display() {
        assert_eq!(ContentBlock::from(ChoiceOption::new(true, "Yes")).to_string(), "[x] Yes");
        assert_eq!(ContentBlock::from(ChoiceOption::new(false, "No")).to_string(), "[ ] No");
    }

    #[test]
    fn test_ordered_list_display_numbers_items() {
        let block = ContentBlock::OrderedList {
            items: vec!["one".to_string(), "two".to_string()],
        };
        assert_eq!(block.to_string(), "1. one\n2. two");
    }

    #[test]
    fn test_element_tag_of_choice() {
        assert_eq!(
            ContentBlock::from(ChoiceOption::new(true, "a")).element_tag(),
            ElementTag::RightAnswer
        );
        assert_eq!(
            ContentBlock::from(ChoiceOption::new(false, "a")).element_tag(),
            ElementTag::WrongAnswer
        );
    }

    #[test]
    fn test_map_text_keeps_correctness() {
        let block = ContentBlock::from(ChoiceOption::new(true, "old"));
        let mapped = block.map_text(|text| text.to_uppercase());
        assert_eq!(mapped, ContentBlock::from(ChoiceOption::new(true, "OLD")));
    }

    #[test]
    fn test_map_text_rewrites_every_line() {
        let block = ContentBlock::TextBlock {
            lines: vec!["a".to_string(), "b".to_string()],
        };
        let mapped = block.map_text(|text| format!("<{}>", text));
        assert_eq!(
            mapped,
            ContentBlock::TextBlock {
                lines: vec!["<a>".to_string(), "<b>".to_string()],
            }
        );
    }

    #[test]
    fn test_card_kind_markers() {
        assert_eq!(CardKind::None.marker(), None);
        assert_eq!(CardKind::Question.marker(), Some(" {QUESTION}"));
        assert_eq!(CardKind::Choice.marker(), Some(" {CHOICE}"));
    }
}
