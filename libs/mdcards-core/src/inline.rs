//! Inline markup: emphasis delimiters and links rewritten to HTML tags.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Delimiter, the HTML tag it becomes, and the doubled delimiter whose
/// leftovers it must not consume. Passes are applied in this order.
const FORMATS: [(&str, &str, Option<&str>); 5] = [
    ("**", "b", None),
    ("*", "em", Some("**")),
    ("~~", "s", None),
    ("``", "code", None),
    ("`", "code", Some("``")),
];

/// Rewrite paired emphasis delimiters in a line to HTML tags.
pub fn format_inline(line: &str) -> String {
    FORMATS
        .iter()
        .fold(line.to_string(), |acc, &(delimiter, tag, doubled)| {
            match doubled.filter(|doubled| acc.contains(doubled)) {
                Some(doubled) => replace_shielded(&acc, delimiter, tag, doubled),
                None => replace_delimited(&acc, delimiter, tag),
            }
        })
}

/// Run a single-character pass without touching occurrences of `doubled`,
/// which are swapped for a private-use character absent from the line.
fn replace_shielded(line: &str, delimiter: &str, tag: &str, doubled: &str) -> String {
    let Some(placeholder) = ('\u{E000}'..='\u{F8FF}').find(|&c| !line.contains(c)) else {
        return replace_delimited(line, delimiter, tag);
    };
    let shielded = line.replace(doubled, placeholder.encode_utf8(&mut [0; 4]));
    replace_delimited(&shielded, delimiter, tag).replace(placeholder, doubled)
}

/// One formatting pass for a single delimiter.
///
/// The line is wrapped in brackets before splitting so that a delimiter at
/// either end still yields a fragment on both sides. An unpaired trailing
/// delimiter is written back literally.
fn replace_delimited(line: &str, delimiter: &str, tag: &str) -> String {
    let wrapped = format!("[{}]", line);
    let parts: Vec<&str> = wrapped.split(delimiter).collect();
    let n = parts.len();

    if n <= 2 {
        return line.to_string();
    }

    let mut out = String::with_capacity(wrapped.len() + n * (tag.len() + 3));
    let mut idx = 0;
    while idx + 2 < n {
        out.push_str(parts[idx]);
        out.push_str(&format!("<{}>", tag));
        out.push_str(parts[idx + 1]);
        out.push_str(&format!("</{}>", tag));
        idx += 2;
    }

    if n % 2 == 0 {
        out.push_str(parts[n - 2]);
        out.push_str(delimiter);
    }
    out.push_str(parts[n - 1]);

    out[1..out.len() - 1].to_string()
}

// Link targets may contain one level of balanced parentheses.
static EMPTY_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[()\]\(((?:[^()]|\([^()]*\))*)\)").expect("valid empty link pattern")
});

static SHORT_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]])\]\(((?:[^()]|\([^()]*\))*)\)").expect("valid short link pattern")
});

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]{2,})\]\(((?:[^()]|\([^()]*\))*)\)").expect("valid link pattern")
});

/// Rewrite `[text](url)` links in a line to anchor tags.
///
/// Patterns are tried in order (empty text, one character, longer text);
/// after every rewrite scanning restarts from the first pattern.
pub fn resolve_links(line: &str) -> String {
    let patterns: [&Regex; 3] = [&*EMPTY_LINK_RE, &*SHORT_LINK_RE, &*LINK_RE];
    let mut line = line.to_string();

    'scan: loop {
        for pattern in patterns {
            let rewritten = pattern
                .captures(&line)
                .map(|caps| rewrite_link(&line, &caps));
            if let Some(rewritten) = rewritten {
                line = rewritten;
                continue 'scan;
            }
        }
        return line;
    }
}

fn rewrite_link(line: &str, caps: &Captures<'_>) -> String {
    let Some(whole) = caps.get(0) else {
        return line.to_string();
    };
    let text = caps.get(1).map_or("", |m| m.as_str());
    let url = caps.get(2).map_or("", |m| m.as_str());

    format!(
        "{}<a href=\"{}\">{}</a>{}",
        &line[..whole.start()],
        url,
        text,
        &line[whole.end()..]
    )
}
