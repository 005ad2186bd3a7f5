use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to bind or inspect the stub server's listening socket.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
