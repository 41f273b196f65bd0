use std::io::{Read, Write};
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

use quanta::Clock;

use crate::channel::PipeChannel;
use crate::error::TransferError;
use crate::transfer::{consume, produce};
use crate::MB;

#[derive(Debug, Clone, Copy)]
pub struct TransferConfig {
    pub total_bytes: u64,
    pub chunk_size: NonZeroUsize,
}

#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    pub elapsed_seconds: f64,
    pub throughput_mb_per_s: Option<f64>,
}

impl RunResult {
    pub fn from_timing(total_bytes: u64, elapsed: Duration) -> Self {
        let elapsed_seconds = elapsed.as_secs_f64();
        let throughput_mb_per_s = if elapsed_seconds == 0.0 {
            // an empty measurement window has no meaningful rate
            None
        } else {
            let total_mb = total_bytes as f64 / MB as f64;
            Some(total_mb / elapsed_seconds)
        };
        Self {
            elapsed_seconds,
            throughput_mb_per_s,
        }
    }
}

pub fn run(config: TransferConfig) -> Result<RunResult, TransferError> {
    let (reader, writer) = PipeChannel::open()?.split();
    run_transfer(reader, writer, config)
}

pub fn run_transfer<R, W>(
    reader: R,
    writer: W,
    config: TransferConfig,
) -> Result<RunResult, TransferError>
where
    R: Read + Send + 'static,
    W: Write,
{
    let TransferConfig {
        total_bytes,
        chunk_size,
    } = config;

    let consumer = thread::Builder::new()
        .name("consumer".to_owned())
        .spawn(move || consume(reader, chunk_size, total_bytes))
        .map_err(TransferError::SpawnFailed)?;

    let clock = Clock::new();
    let start = clock.now();

    let produced = produce(writer, chunk_size, total_bytes);

    // reap the consumer before reporting anything, even after a producer
    // failure; produce() dropped the write end, so the consumer cannot block
    let consumed = consumer.join().map_err(|_| TransferError::JoinFailed)?;

    let end = clock.now();

    produced?;
    consumed?;

    Ok(RunResult::from_timing(total_bytes, end - start))
}
