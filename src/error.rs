use miette::Diagnostic;
use thiserror::Error;

/// An error returned when parsing a [`Case`](crate::Case) from its name fails.
#[derive(Debug, Clone, Diagnostic, Error, PartialEq, Eq)]
#[error("unknown case '{name}'")]
#[diagnostic(help(
    "possible values are 'lower-camel', 'upper-camel', 'lower-hyphen', 'upper-hyphen', 'lower-underscore' and 'upper-underscore'"
))]
pub struct ParseCaseError {
    name: String,
}

impl ParseCaseError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        ParseCaseError { name: name.into() }
    }

    /// Returns the name which could not be parsed.
    pub fn name(&self) -> &str {
        &self.name
    }
}
