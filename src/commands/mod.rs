// Command handlers - one file per domain
pub mod catalog;
pub mod digest;
pub mod settings;
pub mod weekly;
