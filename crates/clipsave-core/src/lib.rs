pub mod config;
pub mod logging;

pub mod dispatch;
pub mod error;
pub mod menu;
pub mod options;
pub mod path;
pub mod request;
