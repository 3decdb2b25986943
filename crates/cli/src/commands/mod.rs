//! Command implementations for rf2ctl CLI

pub mod dik;
pub mod label;
