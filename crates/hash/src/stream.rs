// Copyright 2026 Shastream Developers

use std::io::{ErrorKind, Read};

use tracing::{debug, instrument, trace};

use crate::{
	hasher::HashError,
	sha256::{Sha256, Sha256Digest},
};

/// Default number of bytes requested from the source per read.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Settings for hashing a byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
	chunk_size: usize,
}

impl Default for StreamConfig {
	fn default() -> Self {
		Self {
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}
}

impl StreamConfig {
	/// Creates a config reading at most `chunk_size` bytes at a time. Zero is treated as one.
	pub fn with_chunk_size(chunk_size: usize) -> Self {
		Self {
			chunk_size: chunk_size.max(1),
		}
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}
}

/// Hashes everything `source` yields until end of data, using the default chunk size.
pub fn hash_reader(source: impl Read) -> Result<Sha256Digest, HashError> {
	hash_reader_with_config(source, &StreamConfig::default())
}

/// Hashes everything `source` yields until end of data.
///
/// Only a zero-length read ends the stream: short reads are followed by further reads. Reads
/// interrupted by a signal ([`ErrorKind::Interrupted`]) are retried; every other read error is
/// returned as [`HashError::SourceRead`].
#[instrument(skip_all, level = "debug", fields(chunk_size = config.chunk_size))]
pub fn hash_reader_with_config(
	mut source: impl Read,
	config: &StreamConfig,
) -> Result<Sha256Digest, HashError> {
	let mut hasher = Sha256::new();
	let mut chunk = vec![0u8; config.chunk_size];

	loop {
		let n_read = match source.read(&mut chunk) {
			Ok(0) => break,
			Ok(n_read) => n_read,
			Err(err) if err.kind() == ErrorKind::Interrupted => {
				debug!("read interrupted, retrying");
				continue;
			}
			Err(err) => return Err(err.into()),
		};
		trace!(n_read, "read chunk");
		hasher.update(&chunk[..n_read])?;
	}

	debug!(bit_len = hasher.bit_len(), "source exhausted");
	Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
	use std::io::{self, Cursor};

	use assert_matches::assert_matches;

	use super::*;
	use crate::sha256::hash_all;

	/// Returns the data in reads of cycling sizes, never filling the caller's buffer.
	struct ShortReads<'a> {
		data: &'a [u8],
		sizes: &'a [usize],
		n_calls: usize,
	}

	impl Read for ShortReads<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			let size = self.sizes[self.n_calls % self.sizes.len()];
			self.n_calls += 1;
			let n = size.min(buf.len()).min(self.data.len());
			buf[..n].copy_from_slice(&self.data[..n]);
			self.data = &self.data[n..];
			Ok(n)
		}
	}

	/// Yields `data`, failing with `kind` once before every read.
	struct Flaky<'a> {
		data: &'a [u8],
		kind: ErrorKind,
		fail_next: bool,
	}

	impl Read for Flaky<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			self.fail_next = !self.fail_next;
			if self.fail_next {
				return Err(io::Error::new(self.kind, "flaky source"));
			}
			let n = buf.len().min(self.data.len());
			buf[..n].copy_from_slice(&self.data[..n]);
			self.data = &self.data[n..];
			Ok(n)
		}
	}

	fn sample(len: usize) -> Vec<u8> {
		(0..len).map(|i| (i % 251) as u8).collect()
	}

	#[test]
	fn test_hash_reader_empty_source() {
		assert_eq!(hash_reader(io::empty()).unwrap(), hash_all(b""));
	}

	#[test]
	fn test_hash_reader_matches_hash_all() {
		let data = sample(100_000);
		assert_eq!(hash_reader(Cursor::new(&data)).unwrap(), hash_all(&data));
	}

	#[test]
	fn test_short_reads_do_not_end_stream() {
		let data = sample(20_000);
		let source = ShortReads {
			data: &data,
			sizes: &[1, 100, 63, 4096, 7],
			n_calls: 0,
		};
		let config = StreamConfig::with_chunk_size(8192);
		assert_eq!(hash_reader_with_config(source, &config).unwrap(), hash_all(&data));
	}

	#[test]
	fn test_interrupted_reads_are_retried() {
		let data = sample(3000);
		let source = Flaky {
			data: &data,
			kind: ErrorKind::Interrupted,
			fail_next: false,
		};
		let config = StreamConfig::with_chunk_size(1000);
		assert_eq!(hash_reader_with_config(source, &config).unwrap(), hash_all(&data));
	}

	#[test]
	fn test_read_errors_propagate() {
		let data = sample(10);
		let source = Flaky {
			data: &data,
			kind: ErrorKind::BrokenPipe,
			fail_next: false,
		};
		assert_matches!(
			hash_reader(source),
			Err(HashError::SourceRead(err)) if err.kind() == ErrorKind::BrokenPipe
		);
	}

	#[test]
	fn test_zero_chunk_size_is_clamped() {
		let config = StreamConfig::with_chunk_size(0);
		assert_eq!(config.chunk_size(), 1);
		assert_eq!(hash_reader_with_config(&b"abc"[..], &config).unwrap(), hash_all(b"abc"));
	}
}
