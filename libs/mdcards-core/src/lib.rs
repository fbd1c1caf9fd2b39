//! Core library for markdown flashcard documents.
//!
//! Provides:
//! - Markdown parser splitting a document into cards and content blocks
//! - Inline formatting and link rewriting to HTML
//! - Card model (simple, question, multiple choice)
//! - Renderers for an HTML viewer page and an Anki import file

pub mod card;
pub mod error;
pub mod inline;
pub mod parser;
pub mod render;
pub mod types;

pub use card::Card;
pub use error::{CardError, Result};
pub use inline::{format_inline, resolve_links};
pub use parser::{
    build_card, classify_line, parse, parse_blocks, parse_heading, resolve_kind, split_front_back,
    split_into_cards,
};
pub use render::{get_renderer, CardRenderer, ChoiceIds, RenderOptions, RENDERER_NAMES};
pub use types::{CardKind, ChoiceOption, ContentBlock, ElementTag, Heading, ParsedCard, RawCard};
