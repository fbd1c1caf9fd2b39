//! Sample card documents.

/// A document mixing every card kind and block kind.
pub const MIXED_DECK: &str = "\
Notes before the first card are ignored.

# Rust {QUESTION}
What is **Rust**?

A *systems* language. See [the book](https://doc.rust-lang.org/book/).

# Ownership {QUESTION}
Explain ownership.
## Answer {BACK}
- each value has one owner
- the value is dropped with its owner
## Hint {FRONT}
Think about `drop`.

# Borrowing {CHOICE}
Which reference allows mutation?
[ ] `&T`
[x] `&mut T`

# Traits
1. define shared behaviour
2. enable ~~inheritance~~ generics
";

/// Generate a document with `num_cards` question cards.
pub fn question_deck(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("# Card {} {{QUESTION}}\nQuestion {}?\n\nAnswer {}.\n", i + 1, i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
