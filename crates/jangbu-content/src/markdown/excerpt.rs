//! Excerpt and plain-text extraction from markdown bodies.
//!
//! Used for two things:
//!
//! - deriving a post excerpt when the frontmatter does not provide one
//!   (first paragraph, formatting stripped, truncated), and
//! - producing the plain body text the search index tokenizes, so markdown
//!   syntax never pollutes matching.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Extract the text of the first heading, at any level.
///
/// Inline formatting (bold, links, code spans) is stripped. Returns `None`
/// when the document has no heading.
///
/// # Example
///
/// ```rust
/// use jangbu_content::markdown::first_heading;
///
/// let body = "intro line\n\n## 투자 포인트\n\n내용";
/// assert_eq!(first_heading(body), Some("투자 포인트".to_string()));
/// ```
pub fn first_heading(content: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_heading = false;
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_heading => text.push(' '),
            _ => {}
        }
    }

    None
}

/// Extract the first paragraph as plain text, truncated to `max_chars`.
///
/// Headings are skipped; the first actual paragraph wins. Truncation is
/// character-based (not byte-based) so multi-byte Hangul is never split,
/// and appends `...` when anything was cut.
///
/// # Example
///
/// ```rust
/// use jangbu_content::markdown::first_paragraph;
///
/// let body = "# 제목\n\n첫 문단은 **요약**이 됩니다.\n\n둘째 문단.";
/// assert_eq!(
///     first_paragraph(body, 100),
///     Some("첫 문단은 요약이 됩니다.".to_string())
/// );
/// ```
pub fn first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_paragraph = false;
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,

            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(truncate_chars(trimmed, max_chars));
                }
                in_paragraph = false;
            }

            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    None
}

/// Strip all markdown structure, returning the document's plain text.
///
/// Block boundaries collapse to single spaces; the result never contains
/// consecutive whitespace. Suitable as tokenizer input.
pub fn plain_text(content: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(_) | Event::Start(_) => text.push(' '),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_heading_basic() {
        let body = "# 미국 ETF 투자 가이드\n\n본문";
        assert_eq!(first_heading(body), Some("미국 ETF 투자 가이드".to_string()));
    }

    #[test]
    fn test_first_heading_strips_formatting() {
        let body = "## **3분기** `실적` 정리\n";
        assert_eq!(first_heading(body), Some("3분기 실적 정리".to_string()));
    }

    #[test]
    fn test_first_heading_absent() {
        assert_eq!(first_heading("그냥 문단 하나."), None);
    }

    #[test]
    fn test_first_paragraph_skips_heading() {
        let body = "# 제목\n\n실제 요약 문단.\n\n다음 문단.";
        assert_eq!(first_paragraph(body, 100), Some("실제 요약 문단.".to_string()));
    }

    #[test]
    fn test_first_paragraph_truncates_on_char_boundary() {
        let body = "삼성전자는 3분기에 시장 예상치를 웃도는 실적을 발표했다.";
        let excerpt = first_paragraph(body, 10).unwrap();
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.trim_end_matches("...").chars().count(), 10);
    }

    #[test]
    fn test_first_paragraph_absent() {
        assert_eq!(first_paragraph("# 제목뿐\n\n## 소제목", 100), None);
    }

    #[test]
    fn test_plain_text_strips_markdown() {
        let body = "# 제목\n\n**굵게**와 [링크](https://example.com)와 `코드`.\n\n- 항목 하나\n- 항목 둘\n";
        let text = plain_text(body);
        assert!(text.contains("굵게"));
        assert!(text.contains("링크"));
        assert!(text.contains("코드"));
        assert!(text.contains("항목 하나"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
        assert!(!text.contains("example.com"));
    }

    #[test]
    fn test_plain_text_collapses_whitespace() {
        let text = plain_text("a\n\n\nb\n\nc");
        assert_eq!(text, "a b c");
    }

    #[test]
    fn test_plain_text_empty() {
        assert_eq!(plain_text(""), "");
    }
}
