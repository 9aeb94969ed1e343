// FileConverter Models
// Data structures shared with the frontend

mod app_info;
mod conversion;
mod file;
mod settings;

pub use app_info::*;
pub use conversion::*;
pub use file::*;
pub use settings::*;
