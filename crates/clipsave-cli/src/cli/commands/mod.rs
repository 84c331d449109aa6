//! CLI command handlers.

mod menu;
mod resolve;
mod save;
mod set_dir;
mod show_config;

pub use menu::run_menu;
pub use resolve::run_resolve;
pub use save::run_save;
pub use set_dir::run_set_dir;
pub use show_config::run_show_config;
