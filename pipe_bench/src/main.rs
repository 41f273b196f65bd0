use std::process;

use clap::Parser;
use shared::harness::{self, TransferConfig};

use crate::command_line::GlobalArgs;

mod command_line;

fn main() {
    let args = GlobalArgs::parse();

    let config = TransferConfig {
        total_bytes: args.total_bytes,
        chunk_size: args.chunk_size,
    };

    match harness::run(config) {
        Ok(result) => {
            if result.elapsed_seconds < 1.0 {
                println!("WARNING: run long enough to get meaningful results");
            }
            if let Some(throughput) = result.throughput_mb_per_s {
                println!("Throughput of pipe is {:.2} MB/s", throughput);
            }
        }
        Err(err) => {
            println!("ERROR: {}", err);
            process::exit(1);
        }
    }
}
