pub mod name;
pub mod preferences;
