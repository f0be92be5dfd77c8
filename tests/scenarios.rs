//! Integration tests for end-to-end cart pricing.
//!
//! Each test builds a cart through the public API and checks the exact, unrounded
//! figures it reports.

use rust_decimal::Decimal;
use testresult::TestResult;

use cartwise::prelude::*;

#[test]
fn percentage_over_minimum_is_exact() -> TestResult {
    let mut cart = Cart::with_rule(PercentageDiscount::new(Decimal::TEN, Decimal::new(50, 0))?);
    cart.add_item(LineItem::single("Laptop", Decimal::new(999_99, 2), "Electronics")?);
    cart.add_item(LineItem::single("Mouse", Decimal::new(29_99, 2), "Electronics")?);

    assert_eq!(cart.subtotal(), Decimal::new(1029_98, 2));
    assert_eq!(cart.discount(), Decimal::new(102_998, 3));
    assert_eq!(cart.total(), Decimal::new(926_982, 3));

    Ok(())
}

#[test]
fn fixed_amount_larger_than_order_is_capped() -> TestResult {
    let mut cart = Cart::with_rule(FixedAmountDiscount::unconditional(Decimal::TEN)?);
    cart.add_item(LineItem::single("Pen", Decimal::new(2_99, 2), "Office")?);

    assert_eq!(cart.discount(), Decimal::new(2_99, 2));
    assert_eq!(cart.total(), Decimal::ZERO);

    Ok(())
}

#[test]
fn bogo_frees_one_of_three() -> TestResult {
    let mut cart = Cart::with_rule(BuyOneGetOneDiscount::free_for_all());
    cart.add_item(LineItem::new("Mouse", Decimal::new(49_99, 2), "Electronics", 3)?);

    assert_eq!(cart.subtotal(), Decimal::new(149_97, 2));
    assert_eq!(cart.discount(), Decimal::new(49_99, 2));
    assert_eq!(cart.total(), Decimal::new(99_98, 2));

    Ok(())
}

#[test]
fn empty_cart_is_zero_under_every_rule() -> TestResult {
    let rules: Vec<Discount> = vec![
        NoDiscount.into(),
        PercentageDiscount::unconditional(Decimal::new(20, 0))?.into(),
        FixedAmountDiscount::unconditional(Decimal::new(5, 0))?.into(),
        BuyOneGetOneDiscount::free_for_all().into(),
    ];

    let mut cart = Cart::new();

    for rule in rules {
        cart.set_rule(rule);

        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.discount(), Decimal::ZERO);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    Ok(())
}

#[test]
fn out_of_range_percentage_is_rejected() {
    assert_eq!(
        PercentageDiscount::new(Decimal::new(150, 0), Decimal::ZERO),
        Err(DiscountError::PercentageOutOfRange(Decimal::new(150, 0)))
    );
}

#[test]
fn swapping_rules_reprices_the_same_items() -> TestResult {
    let mut cart = Cart::new();
    cart.add_item(LineItem::new("Gaming Mouse", Decimal::new(49_99, 2), "Electronics", 3)?);
    cart.add_item(LineItem::new("T-Shirt", Decimal::new(19_99, 2), "Clothing", 4)?);

    assert_eq!(cart.subtotal(), Decimal::new(229_93, 2));
    assert_eq!(cart.discount(), Decimal::ZERO);

    cart.set_rule(BuyOneGetOneDiscount::free_for_all());
    assert_eq!(cart.discount(), Decimal::new(89_97, 2));

    cart.set_rule(BuyOneGetOneDiscount::free_in("Electronics"));
    assert_eq!(cart.discount(), Decimal::new(49_99, 2));

    cart.set_rule(BuyOneGetOneDiscount::new(
        Some("Clothing".to_string()),
        Decimal::new(50, 0),
    )?);
    assert_eq!(cart.discount(), Decimal::new(19_99, 2));

    cart.set_rule(BuyOneGetOneDiscount::free_in("Books"));
    assert_eq!(cart.discount(), Decimal::ZERO);
    assert_eq!(cart.total(), cart.subtotal());

    Ok(())
}

#[test]
fn minimum_thresholds_gate_discounts() -> TestResult {
    let mut cart = Cart::new();
    cart.add_item(LineItem::single("Smartphone", Decimal::new(699_99, 2), "Electronics")?);
    cart.add_item(LineItem::single("Phone Case", Decimal::new(24_99, 2), "Electronics")?);

    cart.set_rule(PercentageDiscount::new(Decimal::new(15, 0), Decimal::new(500, 0))?);
    assert_eq!(cart.discount(), Decimal::new(108_747, 3));

    cart.set_rule(PercentageDiscount::new(Decimal::new(20, 0), Decimal::new(800, 0))?);
    assert_eq!(cart.discount(), Decimal::ZERO);

    cart.set_rule(FixedAmountDiscount::new(Decimal::new(50, 0), Decimal::new(600, 0))?);
    assert_eq!(cart.discount(), Decimal::new(50, 0));

    cart.set_rule(FixedAmountDiscount::new(Decimal::ONE_HUNDRED, Decimal::new(1000, 0))?);
    assert_eq!(cart.discount(), Decimal::ZERO);

    Ok(())
}

#[test]
fn tax_applies_to_discounted_total() -> TestResult {
    let mut cart = Cart::with_rule(FixedAmountDiscount::unconditional(Decimal::TEN)?);
    cart.add_item(LineItem::single("Running Shoes", Decimal::new(79_99, 2), "Sports")?);
    cart.add_item(LineItem::single("Face Cream", Decimal::new(30_01, 2), "Beauty")?);

    assert_eq!(cart.total(), Decimal::ONE_HUNDRED);
    assert_eq!(cart.tax(Decimal::new(8_5, 1)), Decimal::new(8_5, 1));
    assert_eq!(cart.total_with_tax(Decimal::new(8_5, 1)), Decimal::new(108_5, 1));

    Ok(())
}

#[test]
fn removing_items_updates_totals() -> TestResult {
    let book = LineItem::single("Cooking Book", Decimal::new(19_99, 2), "Books")?;
    let mug = LineItem::single("Coffee Mug", Decimal::new(12_99, 2), "Home & Garden")?;

    let mut cart = Cart::new();
    cart.add_item(book.clone());
    cart.add_item(mug);

    assert!(cart.remove_item(&book));
    assert!(!cart.remove_item(&book));
    assert_eq!(cart.subtotal(), Decimal::new(12_99, 2));
    assert_eq!(cart.len(), 1);

    cart.clear();
    assert!(cart.is_empty());

    Ok(())
}
