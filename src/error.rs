use std::fmt;

/// Failure modes surfaced to callers.
///
/// `Parse` covers malformed board text (bad card tokens, wrong token or
/// segment counts); `Composition` covers a structurally well-formed board
/// whose deck contents violate the 36-card composition invariant. The two
/// are distinct on purpose: a caller can re-prompt for input on `Parse` but
/// a `Composition` failure means the upstream board reader misread the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Parse(String),
    Composition(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "board parse error: {msg}"),
            Error::Composition(msg) => write!(f, "invalid deck composition: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
