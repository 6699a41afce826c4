// Copyright 2026 Shastream Developers

/// Trait representing streaming cryptographic hash functions which is generic over the input type.
///
/// This interface is largely based on the [`digest::Digest`] trait, except that finalization takes
/// the hasher by mutable reference and is idempotent, while feeding data into a finalized hasher is
/// reported as an error rather than prevented by ownership.
pub trait Hasher<T>
where
	Self: Sized,
{
	/// The hash function output type.
	type Digest;

	fn new() -> Self;

	/// Absorbs more message data.
	///
	/// Fails with [`HashError::AlreadyFinalized`] once [`Hasher::finalize`] has been called.
	fn update(&mut self, data: impl AsRef<[T]>) -> Result<(), HashError>;

	fn chain_update(mut self, data: impl AsRef<[T]>) -> Result<Self, HashError> {
		self.update(data)?;
		Ok(self)
	}

	/// Pads the message and returns the digest.
	///
	/// Only the first call does any work; later calls return the same digest.
	fn finalize(&mut self) -> Self::Digest;

	/// Returns the hasher to its freshly constructed state.
	fn reset(&mut self);
}

#[derive(Debug, thiserror::Error)]
pub enum HashError {
	#[error("Cannot add data to a hasher that has already been finalized")]
	AlreadyFinalized,
	#[error("failed to read from byte source: {0}")]
	SourceRead(#[from] std::io::Error),
}

pub fn hash<T, H: Hasher<T>>(data: impl AsRef<[T]>) -> Result<H::Digest, HashError> {
	Ok(H::new().chain_update(data)?.finalize())
}
