//! Cartwise
//!
//! Cartwise is a small shopping cart pricing library with interchangeable discount rules.
//!
//! A [`cart::Cart`] holds line items and exactly one [`discounts::DiscountRule`]. The rule can be
//! swapped at any time and every figure is recomputed from the current items and rule.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod summary;
