pub mod bit_plane;
pub mod frame;

pub use bit_plane::PlaneWord;
