pub mod map_handler;

pub use map_handler::{__path_index, index};
