// Copyright 2026 Shastream Developers

use std::{
	fs::File,
	io,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use shastream_hash::{hash_reader_with_config, HexDigest, Sha256Digest, StreamConfig};
use shastream_utils::{env::get_chunk_size, tracing::init_tracing};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(about = "Print SHA-256 checksums")]
struct Args {
	/// Files to hash. Standard input is read when none are given or for `-`.
	files: Vec<PathBuf>,
	/// Number of bytes requested per read. Defaults to $SHASTREAM_CHUNK_SIZE, then 8192.
	#[arg(long, value_parser = value_parser!(u32).range(1..))]
	chunk_size: Option<u32>,
	/// Print only the digests.
	#[arg(short, long)]
	quiet: bool,
}

fn hash_input(path: &Path, config: &StreamConfig) -> Result<Sha256Digest> {
	let digest = if path == Path::new("-") {
		hash_reader_with_config(io::stdin().lock(), config)
	} else {
		let file =
			File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
		hash_reader_with_config(file, config)
	};
	digest.with_context(|| format!("failed to hash {}", path.display()))
}

fn main() -> Result<()> {
	let args = Args::parse();

	init_tracing();

	let config = match args.chunk_size {
		Some(chunk_size) => StreamConfig::with_chunk_size(chunk_size as usize),
		None => get_chunk_size()
			.map(StreamConfig::with_chunk_size)
			.unwrap_or_default(),
	};
	debug!(chunk_size = config.chunk_size(), "hashing inputs");

	let files = if args.files.is_empty() {
		vec![PathBuf::from("-")]
	} else {
		args.files
	};

	let mut n_failed = 0usize;
	for path in &files {
		match hash_input(path, &config) {
			Ok(digest) if args.quiet => println!("{}", HexDigest(&digest)),
			Ok(digest) => println!("{}  {}", HexDigest(&digest), path.display()),
			Err(err) => {
				eprintln!("sha256sum: {err:#}");
				n_failed += 1;
			}
		}
	}

	if n_failed > 0 {
		anyhow::bail!("{n_failed} of {} inputs could not be hashed", files.len());
	}
	Ok(())
}
