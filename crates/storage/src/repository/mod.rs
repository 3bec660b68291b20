pub mod meet;
pub mod swimmer;
pub mod time;
