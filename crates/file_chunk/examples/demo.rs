use std::error::Error;
use std::io::{Read, Write};

use file_chunk::Chunk;
use tempfile::NamedTempFile;

fn main() {
	if let Err(e) = run_example() {
		eprintln!("Error running example: {}", e);
	}
}

pub fn run_example() -> Result<(), Box<dyn Error>> {
	let mut file = NamedTempFile::new()?;
	file.write_all(b"The quick brown fox jumps over the lazy dog")?;
	file.flush()?;

	let windows = [(4, Some(9)), (16, Some(19)), (35, None), (20, Some(10))];

	for (start, end) in windows {
		let mut chunk = Chunk::open_blocking(file.path(), start, end)?;
		let mut data = String::new();
		chunk.read_to_string(&mut data)?;
		chunk.close();

		println!("[{}, {}) => {:?}", start, end.map_or_else(|| "EOF".to_string(), |e| e.to_string()), data);
	}

	Ok(())
}
