//! Error types with diagnostics using miette
//!
//! Vector arithmetic fails only on zero divisors; string parsing carries the
//! offending input so the report can point at the bad component.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// Arithmetic Errors
// ============================================================================

/// Errors raised by fallible [`Vector`](crate::Vector) operations
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("division by zero")]
    #[diagnostic(
        code(grapher::vector::division_by_zero),
        help("check the divisor (or the length of the vector projected onto) before dividing")
    )]
    DivisionByZero,

    #[error("vector has length 0, cannot normalize")]
    #[diagnostic(
        code(grapher::vector::zero_length),
        help("a zero vector has no direction to preserve")
    )]
    ZeroLength,
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Error returned when a string is not of the form `"x:<n>, y:<n>"`
#[derive(Error, Diagnostic, Debug)]
#[error("{input:?} is not a valid vector string")]
#[diagnostic(
    code(grapher::vector::parse),
    help("expected something like \"x:100, y:200\"")
)]
pub struct ParseVectorError {
    /// The rejected input
    pub input: String,
    /// What was wrong with the labelled part
    pub reason: &'static str,
    #[source_code]
    src: NamedSource<String>,
    #[label("{reason}")]
    span: SourceSpan,
}

impl ParseVectorError {
    /// Build an error labelling `len` bytes of `input` starting at `offset`.
    pub(crate) fn new(
        input: &str,
        offset: usize,
        len: usize,
        reason: &'static str,
    ) -> Self {
        Self {
            input: input.to_string(),
            reason,
            src: NamedSource::new("<vector>", input.to_string()),
            span: (offset, len).into(),
        }
    }

    /// Byte range of the component that failed to parse
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}
