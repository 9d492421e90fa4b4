pub mod artifact;
pub mod core;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod formula;
pub mod inventory;
pub mod message;
pub mod sender;
pub mod stat;
pub mod total;

pub use crate::core::Config;
