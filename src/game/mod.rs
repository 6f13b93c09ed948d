//! Game core: domain types, pure validation, and the turn engine.

pub mod engine;
pub mod invariants;
pub mod types;
pub mod validator;
