// Copyright 2026 Shastream Developers

use tracing::trace;

use super::{
	buffer::BlockBuffer,
	compression::{compress_into, store_be_u32, Block, State, BLOCK_LEN, STATE_WORDS},
};

/// Size of the trailing message-length field in bytes.
pub(crate) const LENGTH_FIELD_LEN: usize = 8;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

const ZEROS: [u8; BLOCK_LEN] = [0u8; BLOCK_LEN];

/// Writes `value` as eight big-endian bytes independently of the host byte order.
pub(crate) fn encode_be_u64(value: u64) -> [u8; LENGTH_FIELD_LEN] {
	let mut out = [0u8; LENGTH_FIELD_LEN];
	for (i, byte) in out.iter_mut().enumerate() {
		*byte = (value >> (8 * (LENGTH_FIELD_LEN - 1 - i))) as u8;
	}
	out
}

/// Number of zero bytes between the `0x80` marker and the length field, given the number of
/// buffered bytes after the marker has been appended.
pub(crate) fn zero_pad_len(buffered: usize) -> usize {
	(2 * BLOCK_LEN - LENGTH_FIELD_LEN - buffered) % BLOCK_LEN
}

/// Serializes the chaining state as the big-endian digest.
pub(crate) fn state_to_digest(state: &State) -> [u8; DIGEST_LEN] {
	let mut out = [0u8; DIGEST_LEN];
	for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
		store_be_u32(*word, chunk);
	}
	out
}

/// Appends the padding and the 64-bit message length and drives the final block(s) through the
/// compression function.
///
/// `bit_len` is the length of the message proper; the padding bytes are not counted. Leaves
/// `buffer` empty.
pub(crate) fn pad_and_finish(
	state: &mut State,
	buffer: &mut BlockBuffer,
	bit_len: u64,
) -> [u8; DIGEST_LEN] {
	let padding_blocks = if buffer.len() + 1 + LENGTH_FIELD_LEN > BLOCK_LEN {
		2
	} else {
		1
	};
	let mut compress = |block: &Block| compress_into(state, block);

	buffer.feed(&[0x80], &mut compress);
	let zero_pads = zero_pad_len(buffer.len());
	buffer.feed(&ZEROS[..zero_pads], &mut compress);
	buffer.feed(&encode_be_u64(bit_len), &mut compress);
	debug_assert_eq!(buffer.len(), 0);

	trace!(bit_len, padding_blocks, "sha256 finalized");

	state_to_digest(state)
}

// Compile-time check that the digest covers the whole state.
const _: () = assert!(DIGEST_LEN == 4 * STATE_WORDS);
