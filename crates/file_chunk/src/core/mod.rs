pub mod async_chunk;
pub mod chunk;
pub mod stream;
pub mod window;

pub use chunk::Chunk;
pub use stream::DEFAULT_FRAME_SIZE;
pub use window::{Cursor, Step, Window};
