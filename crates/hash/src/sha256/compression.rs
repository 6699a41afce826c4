// Copyright 2026 Shastream Developers

//! The SHA-256 compression function as defined in [FIPS 180-4] Section 6.2.2.
//!
//! [FIPS 180-4]: <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>

/// Number of bytes in one message block.
pub const BLOCK_LEN: usize = 64;

/// Number of 32-bit words in the chaining state.
pub const STATE_WORDS: usize = 8;

const SCHEDULE_LEN: usize = 64;

/// The eight chaining words of SHA-256.
pub type State = [u32; STATE_WORDS];

/// One 64-byte message block.
pub type Block = [u8; BLOCK_LEN];

/// Initial hash value, the first 32 bits of the fractional parts of the square roots of the
/// first 8 primes.
pub const IV: State = [
	0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants, the first 32 bits of the fractional parts of the cube roots of the first 64
/// primes.
static K: [u32; SCHEDULE_LEN] = [
	0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
	0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
	0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
	0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
	0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
	0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
	0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
	0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
	(x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
	(x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
	x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
	x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
	x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
	x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Reads a big-endian word independently of the host byte order.
#[inline(always)]
pub(crate) fn load_be_u32(bytes: &[u8]) -> u32 {
	((bytes[0] as u32) << 24)
		| ((bytes[1] as u32) << 16)
		| ((bytes[2] as u32) << 8)
		| (bytes[3] as u32)
}

/// Writes `word` as four big-endian bytes independently of the host byte order.
#[inline(always)]
pub(crate) fn store_be_u32(word: u32, out: &mut [u8]) {
	out[0] = (word >> 24) as u8;
	out[1] = (word >> 16) as u8;
	out[2] = (word >> 8) as u8;
	out[3] = word as u8;
}

fn message_schedule(block: &Block) -> [u32; SCHEDULE_LEN] {
	let mut w = [0u32; SCHEDULE_LEN];
	for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
		*word = load_be_u32(chunk);
	}
	for t in 16..SCHEDULE_LEN {
		w[t] = small_sigma1(w[t - 2])
			.wrapping_add(w[t - 7])
			.wrapping_add(small_sigma0(w[t - 15]))
			.wrapping_add(w[t - 16]);
	}
	w
}

/// Advances the chaining state by one message block.
///
/// This is a pure function: the returned state is the elementwise modular sum of `state` and the
/// working registers after 64 rounds over the expanded schedule of `block`.
pub fn compress(state: &State, block: &Block) -> State {
	let w = message_schedule(block);

	let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
	for t in 0..SCHEDULE_LEN {
		let t1 = h
			.wrapping_add(big_sigma1(e))
			.wrapping_add(ch(e, f, g))
			.wrapping_add(K[t])
			.wrapping_add(w[t]);
		let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
		h = g;
		g = f;
		f = e;
		e = d.wrapping_add(t1);
		d = c;
		c = b;
		b = a;
		a = t1.wrapping_add(t2);
	}

	let mut out = *state;
	for (word, reg) in out.iter_mut().zip([a, b, c, d, e, f, g, h]) {
		*word = word.wrapping_add(reg);
	}
	out
}

/// Compresses `block` into `state` in place.
#[inline]
pub(crate) fn compress_into(state: &mut State, block: &Block) {
	*state = compress(state, block);
}
