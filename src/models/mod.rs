// Data models (structs)
pub mod property;
pub mod resolved;
pub mod settings;
pub mod vehicle;
pub mod weekly;

pub use property::*;
pub use resolved::*;
pub use settings::*;
pub use vehicle::*;
pub use weekly::*;
