pub mod bearing;
pub mod hint_manager;

pub use bearing::initial_bearing;
pub use hint_manager::{ArrowIcon, HintManager};
