//! Cartwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    catalog::{Catalog, CatalogError},
    discounts::{
        BuyOneGetOneDiscount, Discount, DiscountError, DiscountRule, FixedAmountDiscount,
        NoDiscount, PercentageDiscount,
    },
    items::{ItemError, LineItem},
    summary::{CartSummary, SummaryError},
};
