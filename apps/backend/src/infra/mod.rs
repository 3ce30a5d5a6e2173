//! Infrastructure layer - database opening and startup state.

pub mod db;
pub mod state;
