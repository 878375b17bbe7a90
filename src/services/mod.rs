// src/services/mod.rs
pub mod notifier;
pub mod report;
