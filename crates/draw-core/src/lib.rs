pub mod clock;
pub mod config;
pub mod export;
pub mod pacing;
pub mod progress;
pub mod timer;

pub use clock::ClockFace;
pub use config::DrawConfig;
pub use export::MinuteFile;
pub use pacing::StonePacing;
pub use progress::EndProgress;
pub use timer::{ColorBand, CountdownTimer, DisplayPhase, TickOutput};
