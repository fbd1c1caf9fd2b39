//! Learning cards built from parsed segments.

use crate::error::{CardError, Result};
use crate::types::{CardKind, ChoiceOption, ContentBlock, Heading};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A flashcard. Every variant carries exactly one title heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    /// Title on the front, all content on the back.
    Simple {
        heading: Heading,
        back: Vec<ContentBlock>,
    },
    /// Content partitioned into front and back sides.
    Question {
        heading: Heading,
        front: Vec<ContentBlock>,
        back: Vec<ContentBlock>,
    },
    /// Multiple choice: the options are shown on the front, everything on the back.
    Choice {
        heading: Heading,
        blocks: Vec<ContentBlock>,
    },
}

impl Card {
    pub fn kind(&self) -> CardKind {
        match self {
            Self::Simple { .. } => CardKind::None,
            Self::Question { .. } => CardKind::Question,
            Self::Choice { .. } => CardKind::Choice,
        }
    }

    /// Display name of the card variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple { .. } => "SimpleCard",
            Self::Question { .. } => "QuestionCard",
            Self::Choice { .. } => "ChoiceCard",
        }
    }

    pub fn heading(&self) -> &Heading {
        match self {
            Self::Simple { heading, .. }
            | Self::Question { heading, .. }
            | Self::Choice { heading, .. } => heading,
        }
    }

    /// Blocks shown on the front side below the heading.
    pub fn front_blocks(&self) -> Vec<&ContentBlock> {
        match self {
            Self::Simple { .. } => vec![],
            Self::Question { front, .. } => front.iter().collect(),
            Self::Choice { blocks, .. } => blocks.iter().filter(|block| block.is_choice()).collect(),
        }
    }

    /// Blocks shown on the back side.
    pub fn back_blocks(&self) -> Vec<&ContentBlock> {
        match self {
            Self::Simple { back, .. } | Self::Question { back, .. } => back.iter().collect(),
            Self::Choice { blocks, .. } => blocks.iter().collect(),
        }
    }

    /// Choice options of a choice card, in source order. Empty for other kinds.
    pub fn choice_options(&self) -> Vec<&ChoiceOption> {
        match self {
            Self::Choice { blocks, .. } => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Choice(option) => Some(option),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        }
    }

    /// Add a block to the front side.
    ///
    /// A simple card's front is only its heading, so there the block replaces
    /// the heading and must itself be a heading.
    pub fn extend_front(&mut self, block: ContentBlock) -> Result<()> {
        match self {
            Self::Simple { heading, .. } => match block {
                ContentBlock::Heading(replacement) => {
                    *heading = replacement;
                    Ok(())
                }
                other => Err(CardError::InvalidFrontContent {
                    found: other.element_tag(),
                }),
            },
            Self::Question { front, .. } => {
                front.push(block);
                Ok(())
            }
            Self::Choice { blocks, .. } => {
                blocks.push(block);
                Ok(())
            }
        }
    }

    /// Add several blocks to the front side, stopping at the first rejected one.
    pub fn extend_front_all<I>(&mut self, blocks: I) -> Result<()>
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        for block in blocks {
            self.extend_front(block)?;
        }
        Ok(())
    }

    /// Add a block to the back side.
    pub fn extend_back(&mut self, block: ContentBlock) {
        match self {
            Self::Simple { back, .. } | Self::Question { back, .. } => back.push(block),
            Self::Choice { blocks, .. } => blocks.push(block),
        }
    }

    pub fn extend_back_all<I>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = ContentBlock>,
    {
        for block in blocks {
            self.extend_back(block);
        }
    }
}

/// Plain-text summary listing the type and both sides of the card.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: {}", self.name())?;
        writeln!(f)?;
        writeln!(f, "FrontContent:")?;
        writeln!(f, "{}", self.heading())?;
        for block in self.front_blocks() {
            writeln!(f, "{}", block)?;
        }
        writeln!(f)?;
        write!(f, "BackContent:")?;
        for block in self.back_blocks() {
            write!(f, "\n{}", block)?;
        }
        Ok(())
    }
}
