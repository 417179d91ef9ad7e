use crate::error::SoundveilError;

pub type Result<T> = std::result::Result<T, SoundveilError>;
