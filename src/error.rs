use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while building or rendering an invoice.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unrecognized currency code: {code}")]
    #[diagnostic(
        code(facture_rs::unknown_currency),
        help("Supported currency codes are EUR, USD, GBP, CAD and AUD")
    )]
    UnknownCurrency { code: String },

    /// Neither the requested language nor the fallback language exists in the
    /// loaded translation table.
    #[error("no translation table for language {language:?} (fallback {fallback:?} is also absent)")]
    #[diagnostic(
        code(facture_rs::missing_language),
        help("Check that the translation file contains the fallback language table")
    )]
    MissingLanguage { language: String, fallback: String },

    #[error("missing translation key {key:?} for language {language:?}")]
    #[diagnostic(
        code(facture_rs::missing_translation),
        help("Every language table must define the full set of invoice label keys")
    )]
    MissingTranslation { language: String, key: String },

    #[error("error assembling PDF document: {0}")]
    #[diagnostic(
        code(facture_rs::pdf_error),
        help("The document renderer could not produce the output bytes")
    )]
    Pdf(String),

    #[error("error decoding translation data: {0}")]
    #[diagnostic(
        code(facture_rs::deserialization_error),
        help("The translation file must be a JSON object mapping language codes to key/value tables")
    )]
    DeserializationError(#[source] serde_json::Error),

    #[error("i/o error: {0}")]
    #[diagnostic(code(facture_rs::io_error))]
    Io(#[source] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::DeserializationError(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Type alias for results from this crate.
pub type Result<O> = std::result::Result<O, Error>;
