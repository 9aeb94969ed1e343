// FileConverter Services
// Environment probing and event plumbing

mod app_paths;
mod bootstrap;
mod events;
mod ffmpeg_locator;
mod log_manager;

pub use app_paths::*;
pub use bootstrap::*;
pub use events::*;
pub use ffmpeg_locator::*;
pub use log_manager::*;
