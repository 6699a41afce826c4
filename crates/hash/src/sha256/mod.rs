// Copyright 2026 Shastream Developers

mod buffer;
pub mod compression;
mod digest;
mod hasher;
mod padding;

pub use compression::{compress, Block, State, BLOCK_LEN, IV};
pub use hasher::*;
pub use padding::DIGEST_LEN;

pub use self::digest::{Sha256Core, Sha256Rc};
