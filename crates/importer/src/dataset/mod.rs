pub mod models;
pub mod report;
pub mod service;
pub mod validator;
