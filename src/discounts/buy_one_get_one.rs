//! Buy One Get One
//!
//! For every pair of same-named items, the second is free or discounted by a percentage.
//!
//! Items are grouped by name only. When a target category is set, items outside it are
//! ignored before grouping, and every item in a group is assumed to share the unit price
//! of the first one seen.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{
    discounts::{DiscountError, DiscountRule, percent_of, validate_percentage},
    items::LineItem,
    pricing::format_percent,
};

/// Buy one, get the second free or at `discount_percentage` off.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyOneGetOneDiscount {
    target_category: Option<String>,
    discount_percentage: Decimal,
}

impl BuyOneGetOneDiscount {
    /// Create a new BOGO discount. `None` targets every category.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::PercentageOutOfRange`] if `discount_percentage` is outside
    /// `0..=100`.
    pub fn new(
        target_category: Option<String>,
        discount_percentage: Decimal,
    ) -> Result<Self, DiscountError> {
        Ok(Self {
            target_category,
            discount_percentage: validate_percentage(discount_percentage)?,
        })
    }

    /// Buy one get one free, across all categories.
    pub fn free_for_all() -> Self {
        Self {
            target_category: None,
            discount_percentage: Decimal::ONE_HUNDRED,
        }
    }

    /// Buy one get one free, within a single category.
    pub fn free_in(category: impl Into<String>) -> Self {
        Self {
            target_category: Some(category.into()),
            discount_percentage: Decimal::ONE_HUNDRED,
        }
    }

    /// The category this discount is limited to, if any
    pub fn target_category(&self) -> Option<&str> {
        self.target_category.as_deref()
    }

    /// Discount on every second item, 0-100
    pub fn discount_percentage(&self) -> Decimal {
        self.discount_percentage
    }

    fn targets(&self, item: &LineItem) -> bool {
        self.target_category
            .as_deref()
            .is_none_or(|category| category == item.category())
    }
}

impl Default for BuyOneGetOneDiscount {
    fn default() -> Self {
        Self::free_for_all()
    }
}

impl DiscountRule for BuyOneGetOneDiscount {
    fn compute_discount(&self, items: &[LineItem]) -> Decimal {
        // name -> (unit price of the first item seen, total quantity)
        let mut groups: FxHashMap<&str, (Decimal, u64)> = FxHashMap::default();

        for item in items.iter().filter(|item| self.targets(item)) {
            let group = groups
                .entry(item.name())
                .or_insert((item.unit_price(), 0));

            group.1 += u64::from(item.quantity());
        }

        groups
            .into_iter()
            .fold(Decimal::ZERO, |acc, (name, (unit_price, quantity))| {
                let pairs = quantity / 2;

                trace!(item = name, quantity, pairs, "bogo group");

                let free_value = unit_price.saturating_mul(Decimal::from(pairs));

                acc.saturating_add(percent_of(self.discount_percentage, free_value))
            })
    }

    fn name(&self) -> String {
        let category = self
            .target_category
            .as_deref()
            .map(|category| format!(" ({category})"))
            .unwrap_or_default();

        if self.discount_percentage == Decimal::ONE_HUNDRED {
            format!("Buy One Get One Free{category}")
        } else if self.discount_percentage == Decimal::new(50, 0) {
            format!("Buy One Get One 50% Off{category}")
        } else {
            format!(
                "Buy One Get One {}% Off{category}",
                format_percent(self.discount_percentage)
            )
        }
    }

    fn description(&self) -> String {
        let category = self
            .target_category
            .as_deref()
            .map(|category| format!(" in {category} category"))
            .unwrap_or_default();

        if self.discount_percentage == Decimal::ONE_HUNDRED {
            format!("Buy one item and get another one free{category}")
        } else {
            format!(
                "Buy one item and get {}% off the second item{category}",
                format_percent(self.discount_percentage)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_items() -> Result<[LineItem; 2], crate::items::ItemError> {
        Ok([
            LineItem::new("Gaming Mouse", Decimal::new(49_99, 2), "Electronics", 3)?,
            LineItem::new("T-Shirt", Decimal::new(19_99, 2), "Clothing", 4)?,
        ])
    }

    #[test]
    fn free_for_all_counts_pairs_per_name() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_for_all();

        // 1 x 49.99 + 2 x 19.99
        assert_eq!(rule.compute_discount(&test_items()?), Decimal::new(89_97, 2));

        Ok(())
    }

    #[test]
    fn category_filter_limits_groups() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_in("Electronics");

        assert_eq!(rule.compute_discount(&test_items()?), Decimal::new(49_99, 2));

        Ok(())
    }

    #[test]
    fn half_off_second_item() -> TestResult {
        let rule = BuyOneGetOneDiscount::new(Some("Clothing".to_string()), Decimal::new(50, 0))?;

        assert_eq!(rule.compute_discount(&test_items()?), Decimal::new(19_99, 2));

        Ok(())
    }

    #[test]
    fn no_matching_category_is_zero() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_in("Books");

        assert_eq!(rule.compute_discount(&test_items()?), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn single_units_never_pair() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_for_all();
        let items = [
            LineItem::single("Gaming Laptop", Decimal::new(999_99, 2), "Electronics")?,
            LineItem::single("Wireless Mouse", Decimal::new(29_99, 2), "Electronics")?,
        ];

        assert_eq!(rule.compute_discount(&items), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn separate_entries_with_same_name_are_combined() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_for_all();
        let items = [
            LineItem::single("Coffee Mug", Decimal::new(12_99, 2), "Home & Garden")?,
            LineItem::single("Coffee Mug", Decimal::new(12_99, 2), "Home & Garden")?,
        ];

        assert_eq!(rule.compute_discount(&items), Decimal::new(12_99, 2));

        Ok(())
    }

    #[test]
    fn group_uses_first_price_seen() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_for_all();
        let items = [
            LineItem::single("Plant Pot", Decimal::new(15_99, 2), "Home & Garden")?,
            LineItem::single("Plant Pot", Decimal::new(9_99, 2), "Home & Garden")?,
        ];

        assert_eq!(rule.compute_discount(&items), Decimal::new(15_99, 2));

        Ok(())
    }

    #[test]
    fn groups_by_name_across_categories() -> TestResult {
        let rule = BuyOneGetOneDiscount::free_for_all();
        let items = [
            LineItem::single("Tracker", Decimal::new(10, 0), "Electronics")?,
            LineItem::single("Tracker", Decimal::new(10, 0), "Sports")?,
        ];

        assert_eq!(rule.compute_discount(&items), Decimal::new(10, 0));

        Ok(())
    }

    #[test]
    fn rejects_out_of_range_percentage() {
        assert_eq!(
            BuyOneGetOneDiscount::new(None, Decimal::new(101, 0)),
            Err(DiscountError::PercentageOutOfRange(Decimal::new(101, 0)))
        );
    }

    #[test]
    fn name_branches_on_percentage() -> TestResult {
        let free = BuyOneGetOneDiscount::free_in("Electronics");
        let half = BuyOneGetOneDiscount::new(Some("Clothing".to_string()), Decimal::new(50, 0))?;
        let other = BuyOneGetOneDiscount::new(None, Decimal::new(25, 0))?;

        assert_eq!(free.name(), "Buy One Get One Free (Electronics)");
        assert_eq!(half.name(), "Buy One Get One 50% Off (Clothing)");
        assert_eq!(other.name(), "Buy One Get One 25% Off");

        Ok(())
    }

    #[test]
    fn description_branches_on_percentage() -> TestResult {
        let free = BuyOneGetOneDiscount::free_for_all();
        let half = BuyOneGetOneDiscount::new(Some("Clothing".to_string()), Decimal::new(50, 0))?;

        assert_eq!(free.description(), "Buy one item and get another one free");
        assert_eq!(
            half.description(),
            "Buy one item and get 50% off the second item in Clothing category"
        );

        Ok(())
    }
}
