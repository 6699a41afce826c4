// Copyright 2026 Shastream Developers

/// Environment variable holding the read chunk size used by stream hashing front-ends.
pub const CHUNK_SIZE_VAR: &str = "SHASTREAM_CHUNK_SIZE";

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

// Get the read chunk size from the environment variable.
// Panics if the environment variable is not a positive integer.
pub fn get_chunk_size() -> Option<usize> {
	match std::env::var(CHUNK_SIZE_VAR) {
		Ok(val) => {
			let size = val
				.parse::<usize>()
				.expect("SHASTREAM_CHUNK_SIZE must be a valid integer");
			assert!(size > 0, "SHASTREAM_CHUNK_SIZE must be positive");
			Some(size)
		}
		Err(_) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_boolean_env_flag() {
		std::env::set_var("SHASTREAM_TEST_FLAG_ON", "yes");
		std::env::set_var("SHASTREAM_TEST_FLAG_OFF", "nope");

		assert!(boolean_env_flag_set("SHASTREAM_TEST_FLAG_ON"));
		assert!(!boolean_env_flag_set("SHASTREAM_TEST_FLAG_OFF"));
		assert!(!boolean_env_flag_set("SHASTREAM_TEST_FLAG_UNSET"));
	}
}
