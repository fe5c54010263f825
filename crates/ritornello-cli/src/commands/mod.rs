pub mod config;
pub mod recommend;
pub mod tracks;

pub use config::{init_config, show_config};
pub use recommend::run_recommend;
pub use tracks::run_tracks;
