pub mod config_io;
pub mod loader;
pub mod logging;
pub mod repository;
