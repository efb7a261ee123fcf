pub mod error;
pub mod file;
pub mod telemetry;

pub use error::ChunkError;
pub use file::ChunkConfig;
pub use telemetry::init_tracing;
