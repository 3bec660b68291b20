pub mod import;
pub mod meets;
pub mod swimmers;
