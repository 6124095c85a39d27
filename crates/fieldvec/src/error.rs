//! Outcomes of a conversion that are not a plain success.

use thiserror::Error;

/// Every diagnostic the converter can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInput,
    NoFieldConfigured,
    FieldNotFound,
    WrongComponentCount,
    EmptyField,
}

impl ErrorKind {
    /// Returns true if this kind aborts the run.
    ///
    /// Non-fatal kinds still yield a usable, unaugmented output.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::FieldNotFound | Self::WrongComponentCount
        )
    }
}

/// A failed conversion. The output must not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No input dataset was supplied.
    #[error("no input data")]
    MissingInput,

    /// No point array carries the configured name.
    #[error("no point array named '{0}'")]
    FieldNotFound(String),

    /// The source array does not hold exactly two components per tuple.
    #[error("point array '{field}' has {components} components, expected 2")]
    WrongComponentCount { field: String, components: usize },
}

impl ConvertError {
    /// Returns the diagnostic kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput => ErrorKind::MissingInput,
            Self::FieldNotFound(_) => ErrorKind::FieldNotFound,
            Self::WrongComponentCount { .. } => ErrorKind::WrongComponentCount,
        }
    }
}

/// Why a run finished without adding a vector array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// The source field name is empty.
    #[error("no source field configured")]
    NoFieldConfigured,

    /// The source array has no tuples.
    #[error("point array '{0}' is empty")]
    EmptyField(String),
}

impl Skipped {
    /// Returns the diagnostic kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoFieldConfigured => ErrorKind::NoFieldConfigured,
            Self::EmptyField(_) => ErrorKind::EmptyField,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_kinds() {
        assert!(ConvertError::MissingInput.kind().is_fatal());
        assert!(ConvertError::FieldNotFound("a".into()).kind().is_fatal());
        assert!(ConvertError::WrongComponentCount {
            field: "a".into(),
            components: 3
        }
        .kind()
        .is_fatal());
        assert!(!Skipped::NoFieldConfigured.kind().is_fatal());
        assert!(!Skipped::EmptyField("a".into()).kind().is_fatal());
    }

    #[test]
    fn test_messages() {
        let err = ConvertError::WrongComponentCount {
            field: "Vel".into(),
            components: 3,
        };
        assert_eq!(
            err.to_string(),
            "point array 'Vel' has 3 components, expected 2"
        );
        assert_eq!(
            ConvertError::FieldNotFound("Missing".into()).to_string(),
            "no point array named 'Missing'"
        );
    }
}
