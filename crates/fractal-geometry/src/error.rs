use std::fmt;

/// A figure name that does not match any known figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFigure {
    pub name: String,
}

impl UnknownFigure {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for UnknownFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown figure '{}' (expected squares, spiral, sierpinski, koch, menger or dragon)",
            self.name
        )
    }
}

impl std::error::Error for UnknownFigure {}
