// Copyright 2026 Shastream Developers

pub mod env;
pub mod error_utils;
pub mod tracing;
