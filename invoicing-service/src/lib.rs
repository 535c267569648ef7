//! Invoicing Service - hotel invoice ledger with a mocked submission flow.

pub mod config;
pub mod models;
pub mod services;
