// 📐 Shape Layer - Account field validation
// Rules are checked in a fixed order; the first failing rule is reported.

use crate::entities::Account;
use thiserror::Error;

/// Minimum number of characters in `name`
pub const NAME_MIN_LENGTH: usize = 5;

/// Exact number of characters in `document`
pub const DOCUMENT_LENGTH: usize = 11;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single violated field rule. Displays as `[field] message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{field}] {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

// ============================================================================
// RULES
// ============================================================================

/// Length in UTF-16 code units; characters outside the BMP count twice
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `name` must not be empty
    NameNotBlank,
    /// `name` must have at least NAME_MIN_LENGTH characters
    NameMinLength,
    /// `document` must have exactly DOCUMENT_LENGTH characters
    DocumentLength,
}

impl Rule {
    pub fn field(&self) -> &'static str {
        match self {
            Rule::NameNotBlank | Rule::NameMinLength => "name",
            Rule::DocumentLength => "document",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::NameNotBlank => "nao pode estar em branco",
            Rule::NameMinLength => "minimo 5 caracteres",
            Rule::DocumentLength => "precisa ter 11 caracteres",
        }
    }

    fn holds(&self, account: &Account) -> bool {
        match self {
            Rule::NameNotBlank => !account.name.is_empty(),
            Rule::NameMinLength => utf16_len(&account.name) >= NAME_MIN_LENGTH,
            Rule::DocumentLength => utf16_len(&account.document) == DOCUMENT_LENGTH,
        }
    }

    pub fn check(&self, account: &Account) -> ValidationResult {
        if self.holds(account) {
            Ok(())
        } else {
            Err(ValidationError::new(self.field(), self.message()))
        }
    }
}

/// Rules enforced when an account is created, in evaluation order
pub const CREATE_RULES: [Rule; 3] = [Rule::NameNotBlank, Rule::NameMinLength, Rule::DocumentLength];

// ============================================================================
// SCHEMA VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        SchemaValidator
    }

    /// Validate an account about to be created.
    /// Stops at the first failing rule.
    pub fn validate_create(&self, account: &Account) -> ValidationResult {
        CREATE_RULES.iter().try_for_each(|rule| rule.check(account))
    }
}
