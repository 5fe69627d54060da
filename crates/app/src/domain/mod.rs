//! Foodio Domain Concerns

pub mod carts;
pub mod foods;
