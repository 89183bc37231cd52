//! ANSI highlighting for index entries and document text.
//!
//! Two annotation passes run over every piece of text, in a fixed order:
//! RFC-number tokens are underlined, then a caller-supplied pattern (the
//! search query, or the URL/e-mail pattern for document rendering) is
//! wrapped in a colour escape. Both passes collect match spans over the
//! original text; the output interleaves literal and wrapped spans, so
//! escape codes never nest and the second pass never matches inside the
//! first pass's escapes. On overlap the earlier span wins, with the
//! underline pass winning ties.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;

pub const UNDERLINE: &str = "\x1b[4m";
pub const RESET: &str = "\x1b[0m";

/// Standalone RFC-number token. The "RFC" literal is optional, so bare
/// 4-digit tokens (years, ports) are underlined too; that matches the
/// original tool and is kept as-is.
static RFC_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:RFC)?\d{4}\b").expect("RFC number pattern is valid"));

/// URLs and e-mail addresses, as they appear in RFC body text.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[A-Za-z0-9._/+-]*@|https?://)[A-Za-z0-9._/+]*\.[a-z]+/?[A-Za-z0-9._/-]*")
        .expect("link pattern is valid")
});

/// Highlight colours, 256-colour ANSI codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Color {
    #[default]
    Peach,
    Cyan,
    Green,
    Red,
    Yellow,
    Blue,
    Magenta,
}

impl Color {
    pub fn escape(self) -> &'static str {
        match self {
            Color::Peach => "\x1b[38;5;180m",
            Color::Cyan => "\x1b[38;5;14m",
            Color::Green => "\x1b[38;5;2m",
            Color::Red => "\x1b[38;5;1m",
            Color::Yellow => "\x1b[38;5;3m",
            Color::Blue => "\x1b[38;5;4m",
            Color::Magenta => "\x1b[38;5;5m",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    escape: &'static str,
}

fn match_spans(re: &Regex, text: &str, escape: &'static str) -> impl Iterator<Item = Span> {
    re.find_iter(text).map(move |m| Span {
        start: m.start(),
        end: m.end(),
        escape,
    })
}

/// Apply both passes: underline RFC numbers, wrap `pattern` matches in
/// `color`. Text outside the matched spans is emitted unchanged.
pub fn highlight(text: &str, pattern: &Regex, color: Color) -> String {
    let mut spans: Vec<Span> = match_spans(&RFC_NUMBER, text, UNDERLINE)
        .chain(match_spans(pattern, text, color.escape()))
        .collect();
    // Stable sort keeps the underline pass first at equal starts.
    spans.sort_by_key(|s| s.start);

    let mut out = String::with_capacity(text.len() + spans.len() * (UNDERLINE.len() + RESET.len()));
    let mut pos = 0;
    for span in spans {
        if span.start < pos {
            // Overlaps an already-emitted span; the earlier pass wins.
            continue;
        }
        out.push_str(&text[pos..span.start]);
        out.push_str(span.escape);
        out.push_str(&text[span.start..span.end]);
        out.push_str(RESET);
        pos = span.end;
    }
    out.push_str(&text[pos..]);
    out
}

/// Document rendering: underline RFC numbers and colour URLs/e-mails.
pub fn highlight_document(text: &str, color: Color) -> String {
    highlight(text, &LINK, color)
}
