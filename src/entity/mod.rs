//! Entity module for ledger tables

pub mod accounts;
pub mod addresses;
pub mod assets;
pub mod blockchain_events;
pub mod blocks;
pub mod equivocations;
pub mod holding_eligibilities;
pub mod transactions;
pub mod tx_actions;
pub mod validators;
