/// Failure raised by one of the upstream data sources.
///
/// Every fault a source can hit surfaces as one of these variants; the
/// enricher recovers all of them into an error record, so none of them ever
/// aborts a batch.
#[derive(Debug)]
pub enum SourceError {
    /// The upstream responded with a non-success HTTP status.
    Status { source: &'static str, status: u16 },

    /// The upstream responded successfully but the payload was unusable.
    Data { reason: String },

    /// Network, timeout, or body-decoding fault from the transport layer.
    Transport(reqwest::Error),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Status { source, status } => {
                write!(f, "failed to fetch {source}: {status}")
            }
            SourceError::Data { reason } => write!(f, "{reason}"),
            SourceError::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Transport(err)
    }
}

impl SourceError {
    pub(crate) fn status(source: &'static str, status: reqwest::StatusCode) -> Self {
        Self::Status {
            source,
            status: status.as_u16(),
        }
    }

    pub(crate) fn data(reason: impl Into<String>) -> Self {
        Self::Data {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_source_and_code() {
        let err = SourceError::status("package info", reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "failed to fetch package info: 404");
    }

    #[test]
    fn data_error_message_is_the_reason() {
        let err = SourceError::data("no version information found");
        assert_eq!(err.to_string(), "no version information found");
    }
}
