use std::error::Error;
use std::fmt::{self, Display};
use std::io;

use nix::errno::Errno;

#[derive(Debug)]
pub enum TransferError {
    ChannelCreationFailed(Errno),
    SpawnFailed(io::Error),
    WriteFailed(io::Error),
    ReadFailed(io::Error),
    JoinFailed,
}

impl Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::ChannelCreationFailed(errno) => {
                write!(f, "failed to create a pipe: {}", errno)
            }
            TransferError::SpawnFailed(e) => write!(f, "failed to create thread: {}", e),
            TransferError::WriteFailed(e) => write!(f, "failed to write to pipe: {}", e),
            TransferError::ReadFailed(e) => write!(f, "failed to read from pipe: {}", e),
            TransferError::JoinFailed => write!(f, "failed to join the consumer thread"),
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TransferError::ChannelCreationFailed(errno) => Some(errno),
            TransferError::SpawnFailed(e)
            | TransferError::WriteFailed(e)
            | TransferError::ReadFailed(e) => Some(e),
            TransferError::JoinFailed => None,
        }
    }
}
