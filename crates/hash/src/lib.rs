// Copyright 2026 Shastream Developers

pub mod formatting;
pub mod hasher;
pub mod sha256;
pub mod stream;

pub use ::digest::{self, Digest};
pub use formatting::*;
pub use hasher::*;
pub use sha256::*;
pub use stream::*;
