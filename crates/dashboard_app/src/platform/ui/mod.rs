pub mod constants;
pub mod host;
pub mod render;
pub mod terminal;
