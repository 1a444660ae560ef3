pub mod staging;

pub use staging::StagedAudio;
