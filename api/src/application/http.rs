pub mod generation;
pub mod health;
pub mod history;
pub mod locale;
pub mod server;
