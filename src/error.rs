use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirmapError {
    #[error("invalid --db value '{0}': need to be mirdb or mirtarbase")]
    InvalidFormat(String),

    #[error("line {line}: malformed record (expected at least {expected} columns, found {found})")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },
}
