//! Command handlers

pub mod bookmark;
pub mod category;
pub mod collection;
pub mod config;
pub mod settings;
pub mod status;
pub mod transfer;
