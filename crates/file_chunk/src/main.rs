use anyhow::{Context, Result};
use file_chunk::config::init_tracing;
use file_chunk::{Chunk, ChunkConfig};
use std::io::Write;
use tokio::io::AsyncWriteExt;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
	let config = ChunkConfig::load();
	init_tracing(&config).context("invalid RUST_LOG filter")?;

	let copied = if config.blocking {
		let config = config.clone();
		tokio::task::spawn_blocking(move || copy_blocking(&config)).await??
	} else {
		copy_async(&config).await?
	};

	info!(bytes = copied, path = %config.path.display(), "chunk written");
	Ok(())
}

fn copy_blocking(config: &ChunkConfig) -> Result<u64> {
	let mut chunk = Chunk::open_blocking(&config.path, config.start, config.end)?;
	let mut stdout = std::io::stdout().lock();
	let mut buf = vec![0u8; config.buffer_size.max(1)];
	let mut copied = 0u64;

	while let Some(n) = chunk.read_blocking(&mut buf)? {
		stdout.write_all(&buf[..n]).context("failed to write to stdout")?;
		copied += n as u64;
	}
	stdout.flush()?;
	chunk.close();

	Ok(copied)
}

async fn copy_async(config: &ChunkConfig) -> Result<u64> {
	let mut chunk = Chunk::open(&config.path, config.start, config.end).await?;
	let mut stdout = tokio::io::stdout();
	let mut buf = vec![0u8; config.buffer_size.max(1)];
	let mut copied = 0u64;

	while let Some(n) = chunk.read(&mut buf).await? {
		stdout.write_all(&buf[..n]).await.context("failed to write to stdout")?;
		copied += n as u64;
	}
	stdout.flush().await?;
	chunk.close();

	Ok(copied)
}
