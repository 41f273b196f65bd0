use std::fs::File;

use nix::unistd;

use crate::error::TransferError;

// One anonymous pipe, endpoints wrapped in File so the transfer loops run
// against plain std::io::Read/Write. Both ends close on drop.
pub struct PipeChannel {
    pub reader: File,
    pub writer: File,
}

impl PipeChannel {
    pub fn open() -> Result<Self, TransferError> {
        let (read_fd, write_fd) =
            unistd::pipe().map_err(TransferError::ChannelCreationFailed)?;
        Ok(Self {
            reader: File::from(read_fd),
            writer: File::from(write_fd),
        })
    }

    pub fn split(self) -> (File, File) {
        (self.reader, self.writer)
    }
}
