pub mod ports;
pub mod prompt;
pub mod services;
pub mod value_objects;
