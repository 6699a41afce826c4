// Copyright 2026 Shastream Developers

//! This module implements the streaming [SHA-256] hasher.
//!
//! [SHA-256]: <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>

use std::io;

use shastream_utils::ensure;

use super::{
	buffer::BlockBuffer,
	compression::{compress_into, State, IV},
	padding::{pad_and_finish, DIGEST_LEN},
};
use crate::hasher::{HashError, Hasher};

/// The 32-byte SHA-256 output.
pub type Sha256Digest = [u8; DIGEST_LEN];

/// Streaming SHA-256 hasher.
///
/// Message bytes may be supplied over any number of [`Sha256::update`] calls with arbitrary chunk
/// boundaries. [`Sha256::finalize`] pads the message once and caches the digest; afterwards the
/// hasher rejects more data until it is [reset](Sha256::reset).
#[derive(Debug, Clone)]
pub struct Sha256 {
	state: State,
	buffer: BlockBuffer,
	bit_len: u64,
	finalized: Option<Sha256Digest>,
}

impl Default for Sha256 {
	fn default() -> Self {
		Self {
			state: IV,
			buffer: BlockBuffer::default(),
			bit_len: 0,
			finalized: None,
		}
	}
}

impl Sha256 {
	pub fn new() -> Self {
		Self::default()
	}

	/// Absorbs `data` into the hash.
	pub fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
		ensure!(self.finalized.is_none(), HashError::AlreadyFinalized);
		self.absorb(data);
		Ok(())
	}

	/// Returns the digest of everything absorbed so far, padding the message on the first call.
	pub fn finalize(&mut self) -> Sha256Digest {
		if let Some(digest) = self.finalized {
			return digest;
		}

		let digest = pad_and_finish(&mut self.state, &mut self.buffer, self.bit_len);
		self.finalized = Some(digest);
		digest
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Number of message bits absorbed, modulo 2^64.
	pub fn bit_len(&self) -> u64 {
		self.bit_len
	}

	pub fn is_finalized(&self) -> bool {
		self.finalized.is_some()
	}

	fn absorb(&mut self, data: &[u8]) {
		let Self {
			state,
			buffer,
			bit_len,
			..
		} = self;
		buffer.feed(data, |block| compress_into(state, block));
		*bit_len = bit_len.wrapping_add((data.len() as u64).wrapping_mul(8));
	}
}

/// Hashes `data` in one shot.
pub fn hash_all(data: impl AsRef<[u8]>) -> Sha256Digest {
	let mut hasher = Sha256::new();
	hasher.absorb(data.as_ref());
	hasher.finalize()
}

impl Hasher<u8> for Sha256 {
	type Digest = Sha256Digest;

	fn new() -> Self {
		Self::default()
	}

	fn update(&mut self, data: impl AsRef<[u8]>) -> Result<(), HashError> {
		Sha256::update(self, data.as_ref())
	}

	fn finalize(&mut self) -> Self::Digest {
		Sha256::finalize(self)
	}

	fn reset(&mut self) {
		Sha256::reset(self)
	}
}

impl io::Write for Sha256 {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.update(buf).map_err(io::Error::other)?;
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use assert_matches::assert_matches;
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_new_hasher_is_fresh() {
		let hasher = Sha256::new();
		assert_eq!(hasher.state, IV);
		assert_eq!(hasher.buffer.len(), 0);
		assert_eq!(hasher.bit_len(), 0);
		assert!(!hasher.is_finalized());
	}

	#[test]
	fn test_bit_len_counts_unflushed_bytes() {
		let mut hasher = Sha256::new();
		hasher.update(b"abc").unwrap();
		assert_eq!(hasher.bit_len(), 24);
		assert_eq!(hasher.state, IV);
		hasher.update(&[0u8; 61]).unwrap();
		assert_eq!(hasher.bit_len(), 512);
		assert_ne!(hasher.state, IV);
	}

	#[test]
	fn test_bit_len_wraps() {
		let mut hasher = Sha256::new();
		hasher.bit_len = u64::MAX - 7;
		hasher.update(&[0u8; 2]).unwrap();
		assert_eq!(hasher.bit_len(), 8);
	}

	#[test]
	fn test_finalize_is_idempotent() {
		let mut hasher = Sha256::new();
		hasher.update(b"abc").unwrap();
		let first = hasher.finalize();
		let second = hasher.finalize();
		assert_eq!(first, second);
		assert_eq!(
			first,
			hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
		);
	}

	#[test]
	fn test_update_after_finalize_fails() {
		let mut hasher = Sha256::new();
		hasher.update(b"abc").unwrap();
		let digest = hasher.finalize();

		assert_matches!(hasher.update(b"more"), Err(HashError::AlreadyFinalized));
		assert_matches!(hasher.update(b""), Err(HashError::AlreadyFinalized));
		assert_eq!(hasher.bit_len(), 24);
		assert_eq!(hasher.finalize(), digest);
	}

	#[test]
	fn test_reset_reopens_hasher() {
		let mut hasher = Sha256::new();
		hasher.update(b"some data").unwrap();
		hasher.finalize();
		hasher.reset();

		assert!(!hasher.is_finalized());
		hasher.update(b"abc").unwrap();
		assert_eq!(hasher.finalize(), hash_all(b"abc"));
	}

	#[test]
	fn test_trait_hash_matches_hash_all() {
		let digest = crate::hash::<u8, Sha256>(b"abc").unwrap();
		assert_eq!(digest, hash_all("abc"));
	}

	#[test]
	fn test_write_after_finalize_fails() {
		let mut hasher = Sha256::new();
		hasher.write_all(b"abc").unwrap();
		let digest = hasher.finalize();
		assert_eq!(digest, hash_all(b"abc"));

		let err = hasher.write(b"x").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::Other);
		assert_matches!(
			err.get_ref().and_then(|inner| inner.downcast_ref::<HashError>()),
			Some(HashError::AlreadyFinalized)
		);
	}
}
