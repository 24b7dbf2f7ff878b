//! HTTP surface of the inventory dashboard: config, routing, and the page.

pub mod app;
pub mod config;
