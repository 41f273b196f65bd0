use std::cmp;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;

use crate::error::TransferError;

// Both loops account strictly by the count each channel call actually
// transferred. A short count is normal streaming behavior; an error return
// or a zero-progress return is terminal.

pub fn produce<W>(
    mut writer: W,
    chunk_size: NonZeroUsize,
    total_bytes: u64,
) -> Result<(), TransferError>
where
    W: Write,
{
    let buf = vec![0u8; chunk_size.get()];

    let mut remaining = total_bytes;
    while remaining > 0 {
        let len = cmp::min(buf.len() as u64, remaining) as usize;
        let nwritten = writer
            .write(&buf[..len])
            .map_err(TransferError::WriteFailed)?;
        if nwritten == 0 {
            return Err(TransferError::WriteFailed(io::Error::new(
                io::ErrorKind::WriteZero,
                "pipe accepted no bytes",
            )));
        }
        remaining -= nwritten as u64;
    }

    Ok(())
}

pub fn consume<R>(
    mut reader: R,
    chunk_size: NonZeroUsize,
    total_bytes: u64,
) -> Result<(), TransferError>
where
    R: Read,
{
    let mut buf = vec![0u8; chunk_size.get()];

    let mut remaining = total_bytes;
    while remaining > 0 {
        let len = cmp::min(buf.len() as u64, remaining) as usize;
        let nread = reader
            .read(&mut buf[..len])
            .map_err(TransferError::ReadFailed)?;
        if nread == 0 {
            return Err(TransferError::ReadFailed(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "pipe closed before the transfer finished",
            )));
        }
        remaining -= nread as u64;
    }

    Ok(())
}
