//! Ledger explorer read service
//!
//! Rebuilds account, asset, validator and equivocation views from an append-only
//! ledger event log, and resolves free-form search strings to whichever entity
//! they identify.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
