//! Typed errors for model loading.
//!
//! Every fatal parse error carries the 1-based input line where it was
//! detected; the `Display` text is the single diagnostic surfaced to callers.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Vertex parse error in SMD, line {line}.")]
    VertexParse { line: usize },

    #[error("Vertex normal parse error in SMD, line {line}.")]
    NormalParse { line: usize },

    #[error("UV coord parse error in SMD, line {line}.")]
    UvParse { line: usize },

    /// A material token asked for a triangle before three complete vertex
    /// records were buffered for it.
    #[error("Triangle flush before 3 buffered vertices in SMD, line {line}.")]
    TriangleUnderflow { line: usize },

    /// Capacity request the scratch buffer cannot honor (zero, or a request
    /// that skipped past the current capacity). Indicates a caller bug.
    #[error("Invalid scratch capacity request ({requested}).")]
    ScratchCapacity { requested: usize },

    #[error("No model format recognizes '{file_name}'.")]
    UnknownFormat { file_name: String },
}

impl LoadError {
    /// Input line the error was detected on, when one applies.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::VertexParse { line }
            | LoadError::NormalParse { line }
            | LoadError::UvParse { line }
            | LoadError::TriangleUnderflow { line } => Some(*line),
            LoadError::ScratchCapacity { .. } | LoadError::UnknownFormat { .. } => None,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_cause_and_line() {
        assert_eq!(
            LoadError::VertexParse { line: 3 }.to_string(),
            "Vertex parse error in SMD, line 3."
        );
        assert_eq!(
            LoadError::NormalParse { line: 4 }.to_string(),
            "Vertex normal parse error in SMD, line 4."
        );
    }

    #[test]
    fn line_accessor() {
        assert_eq!(LoadError::TriangleUnderflow { line: 9 }.line(), Some(9));
        assert_eq!(LoadError::ScratchCapacity { requested: 0 }.line(), None);
    }
}
