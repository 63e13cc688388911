use std::io;
use std::net::SocketAddr;

use crate::notes::NoteError;

/// All error types for the freshen-server crate.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to load notes: {0}")]
    Notes(#[from] NoteError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ServerError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::Bind { .. } => "bind_failed",
            ServerError::Notes(_) => "notes_load_failed",
            ServerError::Io(_) => "io_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let err = ServerError::Bind {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:8000: address in use");
        assert_eq!(err.error_code(), "bind_failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: ServerError = io_err.into();
        assert_eq!(err.error_code(), "io_error");
    }
}
