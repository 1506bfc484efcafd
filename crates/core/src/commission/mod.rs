//! Commission module - the rule table mapping products to commission formulas.

mod commission_engine;
mod commission_model;

// Re-export the public interface
pub use commission_engine::{adjusted_basis, default_basis, final_commission, price};
pub use commission_model::{CommissionBasis, CommissionError, CommissionKind, CommissionQuote};
