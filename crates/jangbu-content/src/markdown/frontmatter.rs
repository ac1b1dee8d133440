//! YAML frontmatter extraction from markdown posts.
//!
//! Posts carry metadata at the top of the file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: 미국 ETF 투자 가이드
//! tags:
//!   - ETF
//!   - 해외주식
//! date: 2025-11-02
//! ---
//!
//! 본문은 여기서 시작합니다.
//! ```
//!
//! Extraction is tolerant by design: a file without delimiters is all body,
//! and unparseable YAML is logged and dropped while the body is kept. The
//! loader decides how to fall back for individual missing fields.

use jangbu_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// A markdown document split into frontmatter and body.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Parsed YAML frontmatter, if present and valid.
    yaml: Option<Value>,
    /// Body content after the closing delimiter.
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// Check whether valid frontmatter was found and parsed.
    pub fn is_present(&self) -> bool {
        self.yaml.is_some()
    }

    /// Get the raw YAML value, if present.
    pub fn yaml(&self) -> Option<&Value> {
        self.yaml.as_ref()
    }

    /// Get the body content (everything after the frontmatter).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the frontmatter into a metadata type.
    ///
    /// Returns `None` if no frontmatter was present, and `Err` if the YAML
    /// does not fit the target type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.yaml {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone())
                    .map_err(|e| Error::parse(format!("invalid frontmatter: {e}")))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.yaml.as_ref()?.get(key)?.as_str()
    }
}

/// Split markdown content into YAML frontmatter and body.
///
/// Recognizes content starting with `---`, followed by YAML, followed by a
/// closing `---` line. This function is total:
///
/// - no delimiters → whole content is the body
/// - opening delimiter without a closing one → warn, whole content is body
/// - invalid YAML between delimiters → warn, body after the closing `---`
///
/// # Example
///
/// ```rust
/// use jangbu_content::markdown::split_frontmatter;
///
/// let doc = split_frontmatter("---\ntitle: 배당주 정리\n---\n\n본문");
/// assert!(doc.is_present());
/// assert_eq!(doc.get_str("title"), Some("배당주 정리"));
/// assert_eq!(doc.body().trim(), "본문");
/// ```
pub fn split_frontmatter(content: &str) -> Frontmatter<'_> {
    if !content.starts_with("---") {
        return Frontmatter {
            yaml: None,
            body: content,
        };
    }

    // Step past the opening delimiter line
    let after_open = match content[3..].find('\n') {
        Some(pos) => &content[3 + pos + 1..],
        None => {
            return Frontmatter {
                yaml: None,
                body: content,
            }
        }
    };

    // Locate the closing delimiter; handle the empty-frontmatter case
    // (`---` immediately followed by `---`)
    let (yaml_src, after_close) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else if let Some(pos) = after_open.find("\n---") {
        (&after_open[..pos], &after_open[pos + 4..])
    } else {
        log::warn!("frontmatter opened but never closed; treating file as body only");
        return Frontmatter {
            yaml: None,
            body: content,
        };
    };

    let body = after_close.strip_prefix('\n').unwrap_or(after_close);

    match serde_yaml::from_str::<Value>(yaml_src) {
        Ok(Value::Null) => Frontmatter { yaml: None, body },
        Ok(value) => Frontmatter {
            yaml: Some(value),
            body,
        },
        Err(e) => {
            log::warn!("unparseable frontmatter YAML: {e}");
            Frontmatter { yaml: None, body }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
