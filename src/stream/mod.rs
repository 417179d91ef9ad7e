pub mod carrier;
pub mod queue;

pub use carrier::{CarrierBuffer, FillState};
pub use queue::{BlockQueue, SampleBlock};
