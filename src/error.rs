use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoundveilError {
    /// Represents a bit plane index outside the bit width of the carrier word
    #[error("Bit plane {plane} is out of range for a {bits} bit carrier word")]
    InvalidPlane { plane: u32, bits: u32 },

    /// Represents a sample format outside the supported set of
    /// 8 bit signed, 8 bit unsigned and 16 bit signed
    #[error("Unsupported sample format: {bits} bit, signed: {signed}")]
    UnsupportedType { bits: u16, signed: bool },

    /// Represents a finalize call on a carrier buffer that is not full yet
    #[error("Carrier buffer is still filling, there is no finished frame payload to take")]
    NotReady,

    /// Represents an append on a carrier buffer that awaits its finalize
    #[error("Carrier buffer is full, finalize the current frame before appending")]
    CarrierFull,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
