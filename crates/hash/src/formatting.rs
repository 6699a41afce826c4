// Copyright 2026 Shastream Developers

use std::fmt;

use crate::sha256::{Sha256Digest, DIGEST_LEN};

/// Display adapter rendering a digest as lowercase hexadecimal, most significant nibble first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexDigest<'a>(pub &'a Sha256Digest);

impl fmt::Display for HexDigest<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for byte in self.0 {
			write!(f, "{byte:02x}")?;
		}
		Ok(())
	}
}

pub fn to_hex(digest: &Sha256Digest) -> String {
	HexDigest(digest).to_string()
}

/// Parses exactly 64 hexadecimal digits of either case.
pub fn parse_hex(s: &str) -> Option<Sha256Digest> {
	let s = s.as_bytes();
	if s.len() != 2 * DIGEST_LEN {
		return None;
	}

	let mut out = [0u8; DIGEST_LEN];
	for (byte, pair) in out.iter_mut().zip(s.chunks_exact(2)) {
		*byte = (nibble(pair[0])? << 4) | nibble(pair[1])?;
	}
	Some(out)
}

fn nibble(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}
