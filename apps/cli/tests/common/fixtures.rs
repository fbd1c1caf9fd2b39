//! Sample decks for export tests.

pub const SAMPLE_DECK: &str = "\
# Capital {QUESTION}
What is the capital of France?

Paris

# Pick {CHOICE}
[x] Correct
[ ] Wrong

# Note
Plain **back** side.
";
