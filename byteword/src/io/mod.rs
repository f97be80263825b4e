//! I/O traits and a reusable word buffer.

mod stream;
mod word_buffer;

pub use stream::{Read, Write};
pub use word_buffer::WordBuffer;
