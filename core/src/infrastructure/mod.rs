pub mod db;
pub mod history;
pub mod llm;
pub mod locale;
