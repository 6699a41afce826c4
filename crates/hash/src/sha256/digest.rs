// Copyright 2026 Shastream Developers

//! Block-level core for the RustCrypto [`digest`] traits.
//!
//! Wrapping [`Sha256Core`] in [`CoreWrapper`] yields a hasher implementing [`digest::Digest`],
//! which finalizes by value, so the closed state of [`super::Sha256`] is never observable here.

use core::fmt;

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
		OutputSizeUser, UpdateCore,
	},
	typenum::{U32, U64},
	HashMarker, Output, Reset,
};

use super::{
	compression::{compress_into, State, BLOCK_LEN, IV},
	padding::state_to_digest,
};

/// Lowest-level core hasher state of SHA-256.
#[derive(Clone)]
pub struct Sha256Core {
	state: State,
	blocks_len: u64,
}

/// SHA-256 hasher implementing the RustCrypto traits.
pub type Sha256Rc = CoreWrapper<Sha256Core>;

impl HashMarker for Sha256Core {}

impl BlockSizeUser for Sha256Core {
	type BlockSize = U64;
}

impl BufferKindUser for Sha256Core {
	type BufferKind = Eager;
}

impl UpdateCore for Sha256Core {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len = self.blocks_len.wrapping_add(blocks.len() as u64);
		for block in blocks {
			compress_into(&mut self.state, block.as_ref());
		}
	}
}

impl OutputSizeUser for Sha256Core {
	type OutputSize = U32;
}

impl FixedOutputCore for Sha256Core {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let bit_len = self
			.blocks_len
			.wrapping_mul(BLOCK_LEN as u64)
			.wrapping_add(buffer.get_pos() as u64)
			.wrapping_mul(8);
		buffer.len64_padding_be(bit_len, |block| compress_into(&mut self.state, block.as_ref()));
		out.copy_from_slice(&state_to_digest(&self.state));
	}
}

impl Default for Sha256Core {
	#[inline]
	fn default() -> Self {
		Self {
			state: IV,
			blocks_len: 0,
		}
	}
}

impl Reset for Sha256Core {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl AlgorithmName for Sha256Core {
	#[inline]
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha256")
	}
}

impl fmt::Debug for Sha256Core {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Sha256Core { ... }")
	}
}
