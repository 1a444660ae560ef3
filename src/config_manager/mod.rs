pub mod azure;
pub mod main;
pub mod system;
pub mod utils;

pub use azure::AzureSpeechConfig;
pub use main::Config;
pub use system::SystemConfig;
