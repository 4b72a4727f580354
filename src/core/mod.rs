// src/core/mod.rs

pub mod entities;
pub mod json;
pub mod net;
pub mod sanitize;

pub use entities::decode;
pub use net::{HtmlSource, HttpSource};
