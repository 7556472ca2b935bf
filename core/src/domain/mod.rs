pub mod common;
pub mod generation;
pub mod history;
pub mod locale;
pub mod render;
