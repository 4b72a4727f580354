// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod chords;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod markup;
pub mod model;
pub mod scrape;
pub mod specs;
pub mod store;
