//! Testimonial records and the JSON document they are loaded from
//!
//! The document is a plain ordered array:
//!
//! ```json
//! [
//!   { "text": "Great work on our kitchen.", "name": "Jane D." },
//!   { "text": "On time and on budget.", "name": "Sam K." }
//! ]
//! ```
//!
//! Array order is carousel order and is preserved exactly.

use serde::{Deserialize, Serialize};

/// A single customer quote shown in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quote body
    pub text: String,
    /// Attribution line
    pub name: String,
}

impl Testimonial {
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
        }
    }
}

/// Reasons a testimonial document cannot be used
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestimonialError {
    #[error("Testimonial source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed testimonial document: {0}")]
    Malformed(String),

    #[error("Testimonial list is empty")]
    Empty,

    #[error("Testimonial {index} is missing its {field}")]
    BlankField { index: usize, field: &'static str },
}

/// Parse and validate a testimonial document.
///
/// Fails on invalid JSON, on an empty list and on any record whose text or
/// name is blank. Whitespace around both fields is trimmed.
pub fn parse_testimonials(source: &str) -> Result<Vec<Testimonial>, TestimonialError> {
    let raw: Vec<Testimonial> =
        serde_json::from_str(source).map_err(|e| TestimonialError::Malformed(e.to_string()))?;

    if raw.is_empty() {
        return Err(TestimonialError::Empty);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, item)| {
            let text = item.text.trim();
            let name = item.name.trim();
            if text.is_empty() {
                return Err(TestimonialError::BlankField {
                    index,
                    field: "text",
                });
            }
            if name.is_empty() {
                return Err(TestimonialError::BlankField {
                    index,
                    field: "name",
                });
            }
            Ok(Testimonial::new(text, name))
        })
        .collect()
}

/// Read and parse a testimonial document from disk
#[cfg(feature = "ssr")]
pub async fn load_testimonials_file(
    path: impl AsRef<std::path::Path>,
) -> Result<Vec<Testimonial>, TestimonialError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TestimonialError::Unavailable(format!("{}: {}", path.display(), e)))?;
    parse_testimonials(&contents)
}
