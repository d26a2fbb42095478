// Unit Battle Schema - Shared type definitions
// This crate contains the plain data records that are shared between the
// battle engine, the player data store and any outer API layer.

// Re-export the main types
pub use battle_data::*;
pub use unit_data::*;

pub mod battle_data;
pub mod unit_data;
