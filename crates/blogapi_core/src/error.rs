//! Error types for payload validation.

use std::fmt;
use thiserror::Error;

/// Result type for validation checks.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A single rejected field.
///
/// The display text is the user-facing message returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name missing or shorter than two characters.
    #[error("Nome deve ter pelo menos 2 caracteres")]
    InvalidName,

    /// Email missing or malformed.
    #[error("Email deve ter um formato válido")]
    InvalidEmail,

    /// Password supplied but empty.
    #[error("Senha não pode ser vazia")]
    EmptyPassword,

    /// Title missing or blank.
    #[error("Título é obrigatório")]
    MissingTitle,

    /// Content missing or blank.
    #[error("Conteúdo é obrigatório")]
    MissingContent,

    /// Author id missing or zero.
    #[error("ID do autor é obrigatório")]
    MissingAuthorId,
}

/// Every field rejected by one validation pass, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rejected field.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Returns true if nothing was rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `error` was recorded.
    #[must_use]
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    /// Returns the recorded errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// `Ok(())` if empty, otherwise `Err(self)`.
    pub fn into_result(self) -> ValidationResult {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_messages_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::InvalidName);
        errors.push(ValidationError::InvalidEmail);
        assert_eq!(
            errors.to_string(),
            "Nome deve ter pelo menos 2 caracteres, Email deve ter um formato válido"
        );
    }

    #[test]
    fn empty_set_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let single: ValidationErrors = ValidationError::MissingTitle.into();
        assert!(single.contains(ValidationError::MissingTitle));
        assert!(single.into_result().is_err());
    }
}
