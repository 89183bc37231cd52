//! Output rendering: full documents, metadata summaries, search results.

use std::io::{self, Write};

use regex::Regex;

use crate::client::RfcRecord;
use crate::highlight::{self, Color};

/// Full-text view: the document body with RFC numbers underlined and
/// URLs/e-mails coloured.
pub fn render_document(record: &RfcRecord, link_color: Color) -> String {
    highlight::highlight_document(&record.text, link_color)
}

/// Metadata summary, plain text. Absent abstract/keywords are omitted
/// rather than rendered empty.
pub fn render_info(record: &RfcRecord) -> String {
    let meta = &record.meta;
    let mut out = format!(
        "General information about RFC{}:\nTitle:           {}\n",
        record.id, meta.title
    );
    if let Some(abstract_text) = &meta.abstract_text {
        out.push_str(&format!("\nAbstract:\n{abstract_text}\n"));
    }
    out.push_str(&format!("\nPage count:      {}\n", meta.page_count));
    if let Some(keywords) = &meta.keywords {
        out.push_str(&format!("Keywords:        {}\n", keywords.join(", ")));
    }
    out.push_str(&format!("Authors:         {}\n", meta.authors.join(", ")));
    out.push_str(&format!("Publishing date: {}", meta.pub_date));
    out
}

/// Emit each matching entry, highlighted, one per line, in the order given.
pub fn write_search_results(
    out: &mut impl Write,
    matches: &[&str],
    query: &Regex,
    color: Color,
) -> io::Result<()> {
    for entry in matches {
        writeln!(out, "{}", highlight::highlight(entry, query, color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RfcMetadata;
    use regex::RegexBuilder;

    fn record(abstract_text: Option<&str>, keywords: Option<Vec<&str>>) -> RfcRecord {
        RfcRecord {
            id: "0791".to_string(),
            text: "Internet Protocol\nsee https://www.ietf.org/\n".to_string(),
            meta: RfcMetadata {
                title: "Internet Protocol".to_string(),
                abstract_text: abstract_text.map(str::to_string),
                authors: vec!["J. Postel".to_string()],
                page_count: 45,
                keywords: keywords
                    .map(|k| k.into_iter().map(str::to_string).collect()),
                obsoleted_by: vec![],
                pub_date: "September 1981".to_string(),
            },
        }
    }

    #[test]
    fn test_info_with_all_fields() {
        let record = record(Some("The Internet Protocol."), Some(vec!["ip", "datagram"]));
        let info = render_info(&record);

        assert!(info.starts_with("General information about RFC0791:"));
        assert!(info.contains("Title:           Internet Protocol"));
        assert!(info.contains("Abstract:\nThe Internet Protocol."));
        assert!(info.contains("Page count:      45"));
        assert!(info.contains("Keywords:        ip, datagram"));
        assert!(info.contains("Authors:         J. Postel"));
        assert!(info.contains("Publishing date: September 1981"));
    }

    #[test]
    fn test_info_omits_absent_optional_fields() {
        let info = render_info(&record(None, None));

        assert!(!info.contains("Abstract:"));
        assert!(!info.contains("Keywords:"));
        assert!(info.contains("Page count:      45"));
        assert!(info.contains("Publishing date: September 1981"));
    }

    #[test]
    fn test_info_is_not_highlighted() {
        let info = render_info(&record(None, None));
        assert!(!info.contains('\x1b'));
    }

    #[test]
    fn test_document_view_is_highlighted() {
        let out = render_document(&record(None, None), Color::Cyan);
        assert!(out.contains("\x1b[38;5;14mhttps://www.ietf.org/\x1b[0m"));
    }

    #[test]
    fn test_search_results_one_entry_per_line() {
        let query = RegexBuilder::new("protocol")
            .case_insensitive(true)
            .build()
            .unwrap();
        let matches = vec!["0791 Internet Protocol.", "2068 Hypertext Transfer Protocol."];

        let mut buf = Vec::new();
        write_search_results(&mut buf, &matches, &query, Color::Peach).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("\x1b[38;5;180mProtocol\x1b[0m"));
        assert!(out.contains("\x1b[4m0791\x1b[0m"));
    }
}
