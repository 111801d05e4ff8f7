pub mod config;
pub mod item;
pub mod line;

pub use config::*;
pub use item::*;
pub use line::*;
