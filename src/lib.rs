pub mod error;
pub mod fpl;
pub mod handler;
pub mod leaders;
pub mod model;
pub mod prediction;
pub mod render;
pub mod standings;
pub mod validator;
