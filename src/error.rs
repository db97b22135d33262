use thiserror::Error;

use crate::league::League;

/// Failures while producing league data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Temporary failure fetching {what} for {league}, please retry")]
    Transient { what: &'static str, league: League },

    #[error("No external feed configured for {0}")]
    NotConfigured(League),
}

pub type DataResult<T> = Result<T, DataError>;
