use std::num::NonZeroUsize;

use clap::Parser;
use shared::{GB, MB};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct GlobalArgs {
    #[arg(short, long, default_value_t = 8 * GB)]
    pub total_bytes: u64,
    #[arg(short, long, default_value_t = NonZeroUsize::new(MB as usize).unwrap())]
    pub chunk_size: NonZeroUsize,
}
