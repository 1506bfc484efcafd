//! Portfolio module - product types, variants, and portfolio items.

mod portfolio_model;

// Re-export the public interface
pub use portfolio_model::{
    NewPortfolioItem, PortfolioItem, ProductSelection, ProductType, ProductVariant,
};
