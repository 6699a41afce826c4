// Copyright 2026 Shastream Developers

use crate::env::boolean_env_flag_set;

/// Installs a global subscriber printing events to stderr.
///
/// The filter is taken from `RUST_LOG` and defaults to `warn`. Setting `SHASTREAM_TRACE_SPANS`
/// additionally reports span durations when spans close. Calling this more than once is harmless.
pub fn init_tracing() {
	use tracing_subscriber::{
		fmt::{self, format::FmtSpan},
		layer::SubscriberExt,
		util::SubscriberInitExt,
		EnvFilter,
	};

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let span_events = if boolean_env_flag_set("SHASTREAM_TRACE_SPANS") {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_span_events(span_events),
		)
		.try_init();
}
