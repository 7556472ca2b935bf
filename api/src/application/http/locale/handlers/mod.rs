pub mod get_locale;
pub mod set_locale;
