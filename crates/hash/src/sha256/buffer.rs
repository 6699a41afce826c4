// Copyright 2026 Shastream Developers

use std::cmp;

use super::compression::{Block, BLOCK_LEN};

/// Accumulates a byte stream into whole 64-byte blocks.
///
/// Holds at most `BLOCK_LEN - 1` bytes between calls: a block is handed to the compression
/// callback as soon as it fills up.
#[derive(Debug, Clone)]
pub(crate) struct BlockBuffer {
	block: Block,
	len: usize,
}

impl Default for BlockBuffer {
	fn default() -> Self {
		Self {
			block: [0u8; BLOCK_LEN],
			len: 0,
		}
	}
}

impl BlockBuffer {
	/// Number of buffered bytes, always less than `BLOCK_LEN`.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Appends `msg`, calling `compress` for every block completed along the way.
	pub fn feed(&mut self, mut msg: &[u8], mut compress: impl FnMut(&Block)) {
		while !msg.is_empty() {
			if self.len == 0 {
				// Nothing pending, so whole blocks are absorbed straight from the input
				while let Some((block, rest)) = msg.split_first_chunk::<BLOCK_LEN>() {
					compress(block);
					msg = rest;
				}
				if msg.is_empty() {
					break;
				}
			}

			let to_process = cmp::min(BLOCK_LEN - self.len, msg.len());
			self.block[self.len..self.len + to_process].copy_from_slice(&msg[..to_process]);
			self.len += to_process;

			if self.len == BLOCK_LEN {
				compress(&self.block);
				self.len = 0;
			}

			msg = &msg[to_process..];
		}
	}
}
