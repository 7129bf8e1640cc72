use thiserror::Error;

/// Failure taxonomy for a run.
///
/// `Transport` is fatal when it hits the root query and a branch-skip when it
/// hits a recursive sub-query. `Parse` is never fatal: the query is treated
/// as having returned nothing. `Io` and `Config` are always fatal.
#[derive(Debug, Error)]
pub enum SubhunterError {
    #[error("lookup request for {query} failed: {reason}")]
    Transport { query: String, reason: String },

    #[error("malformed lookup payload for {query}: {reason}")]
    Parse { query: String, reason: String },

    #[error("cannot write output to {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(String),
}

impl SubhunterError {
    pub fn transport(query: impl Into<String>, reason: impl ToString) -> Self {
        Self::Transport { query: query.into(), reason: reason.to_string() }
    }

    pub fn parse(query: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse { query: query.into(), reason: reason.to_string() }
    }
}
