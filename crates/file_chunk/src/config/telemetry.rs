use super::ChunkConfig;
use std::str::FromStr;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Installs the global subscriber. Does nothing when no filter is configured,
/// and reports an unparsable filter instead of panicking.
///
/// # Errors
///
/// Returns the parse error when `rust_log` is not a valid filter directive.
pub fn init_tracing(config: &ChunkConfig) -> Result<(), tracing_subscriber::filter::ParseError> {
	let Some(directives) = config.rust_log.as_deref() else {
		return Ok(());
	};
	let filter = EnvFilter::from_str(directives)?;

	let layer = if config.log_json {
		tracing_subscriber::fmt::layer()
			.with_writer(std::io::stderr)
			.fmt_fields(JsonFields::default())
			.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
			.with_filter(filter)
			.boxed()
	} else {
		tracing_subscriber::fmt::layer()
			.with_writer(std::io::stderr)
			.event_format(tracing_subscriber::fmt::format().pretty())
			.with_filter(filter)
			.boxed()
	};

	tracing_subscriber::registry().with(layer).init();
	Ok(())
}
