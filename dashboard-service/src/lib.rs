//! Dashboard Service - navigation, theme and invoice presentation for the
//! hotel billing dashboard.

pub mod config;
pub mod models;
pub mod services;
