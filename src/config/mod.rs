// src/config/mod.rs

pub mod layout;
pub mod scoring;
