//! Output options.
//!
//! The only formatting choice the format leaves open is the line
//! terminator: the grammar is line-oriented and the parser accepts both
//! Unix and Windows endings, so the writing side picks one.
//!
//! ```rust
//! use mapfile::{to_string_with, Document, LineEnding};
//!
//! let mut doc = Document::new();
//! doc.insert("a", "1");
//! doc.insert("b", "2");
//!
//! assert_eq!(to_string_with(&doc, LineEnding::CrLf).unwrap(), "a=1\r\nb=2");
//! ```

/// The terminator placed between lines when rendering a document to text.
///
/// [`to_string`](crate::to_string) defaults to [`LineEnding::Lf`] so output
/// is byte-identical everywhere; [`write_file`](crate::write_file) uses
/// [`LineEnding::native`] to match the platform convention for files the
/// user may open in an editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`.
    #[default]
    Lf,
    /// `\r\n`.
    CrLf,
}

impl LineEnding {
    /// Returns the terminator characters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// The conventional ending for the compiling platform.
    #[must_use]
    pub const fn native() -> Self {
        #[cfg(windows)]
        {
            LineEnding::CrLf
        }
        #[cfg(not(windows))]
        {
            LineEnding::Lf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_text() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn default_is_lf() {
        assert_eq!(LineEnding::default(), LineEnding::Lf);
    }
}
