//! Rule Demonstration
//!
//! Replays four fixed scenarios that show the same cart priced under different rules.

use std::io::Write;

use cartwise::{
    cart::Cart,
    discounts::{
        BuyOneGetOneDiscount, Discount, DiscountRule, FixedAmountDiscount, NoDiscount,
        PercentageDiscount,
    },
    items::LineItem,
    pricing::format_amount,
};
use rust_decimal::Decimal;
use tracing::info;

use super::table;

const BANNER_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 50;

/// Print every demonstration section.
pub(super) fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "SHOPPING CART DISCOUNT RULES - DEMONSTRATION")?;
    writeln!(out, "{banner}")?;

    rule_switching(out)?;
    order_sizes(out)?;
    buy_one_get_one(out)?;
    minimum_amounts(out)?;

    info!("demonstration complete");

    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> anyhow::Result<()> {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "-".repeat(SECTION_WIDTH))?;

    Ok(())
}

/// Price each rule against the cart, returning `[name, discount, total]` rows.
fn price_rules(cart: &mut Cart, rules: Vec<Discount>) -> Vec<[String; 3]> {
    rules
        .into_iter()
        .map(|rule| {
            let name = rule.name();

            cart.set_rule(rule);

            [name, format_amount(cart.discount()), format_amount(cart.total())]
        })
        .collect()
}

fn rule_switching(out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "1. RULE SWITCHING")?;

    let mut cart = Cart::new();
    cart.add_item(LineItem::single("Gaming Laptop", Decimal::new(999_99, 2), "Electronics")?);
    cart.add_item(LineItem::single("Wireless Mouse", Decimal::new(29_99, 2), "Electronics")?);
    cart.add_item(LineItem::single("Cotton T-Shirt", Decimal::new(24_99, 2), "Clothing")?);

    writeln!(out, "Cart subtotal: {}", format_amount(cart.subtotal()))?;

    let rules = vec![
        NoDiscount.into(),
        PercentageDiscount::unconditional(Decimal::TEN)?.into(),
        PercentageDiscount::new(Decimal::new(15, 0), Decimal::new(50, 0))?.into(),
        FixedAmountDiscount::unconditional(Decimal::new(25, 0))?.into(),
        BuyOneGetOneDiscount::free_in("Electronics").into(),
    ];

    let rows = price_rules(&mut cart, rules);

    writeln!(out, "{}", table(["Rule", "Discount", "Total"], rows, 1..3))?;

    Ok(())
}

fn order_sizes(out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "2. ORDER SIZE SCENARIOS")?;

    let ten_over_fifty = PercentageDiscount::new(Decimal::TEN, Decimal::new(50, 0))?;

    let scenarios: Vec<(&str, Vec<LineItem>, Discount)> = vec![
        (
            "Small Order (<$50)",
            vec![LineItem::single("Book", Decimal::new(15_99, 2), "Books")?],
            ten_over_fifty.clone().into(),
        ),
        (
            "Medium Order ($50-$100)",
            vec![
                LineItem::single("Headphones", Decimal::new(79_99, 2), "Electronics")?,
                LineItem::single("Phone Case", Decimal::new(19_99, 2), "Electronics")?,
            ],
            ten_over_fifty.into(),
        ),
        (
            "Large Order (>$100)",
            vec![
                LineItem::single("Gaming Laptop", Decimal::new(999_99, 2), "Electronics")?,
                LineItem::single("External Monitor", Decimal::new(299_99, 2), "Electronics")?,
            ],
            PercentageDiscount::new(Decimal::new(20, 0), Decimal::ONE_HUNDRED)?.into(),
        ),
        (
            "Fixed Discount > Order Total",
            vec![LineItem::single("Pen", Decimal::new(2_99, 2), "Office")?],
            FixedAmountDiscount::unconditional(Decimal::TEN)?.into(),
        ),
    ];

    let rows = scenarios
        .into_iter()
        .map(|(scenario, items, rule)| {
            let mut cart = Cart::with_rule(rule);

            for item in items {
                cart.add_item(item);
            }

            [
                scenario.to_string(),
                format_amount(cart.subtotal()),
                format_amount(cart.discount()),
                format_amount(cart.total()),
            ]
        })
        .collect();

    writeln!(
        out,
        "{}",
        table(["Scenario", "Subtotal", "Discount", "Total"], rows, 1..4)
    )?;

    Ok(())
}

fn buy_one_get_one(out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "3. BUY ONE GET ONE")?;

    let mut cart = Cart::new();
    cart.add_item(LineItem::new("Gaming Mouse", Decimal::new(49_99, 2), "Electronics", 3)?);
    cart.add_item(LineItem::new("T-Shirt", Decimal::new(19_99, 2), "Clothing", 4)?);

    writeln!(
        out,
        "Cart: 3x Gaming Mouse ($49.99) + 4x T-Shirt ($19.99) = {}",
        format_amount(cart.subtotal())
    )?;

    let rules = vec![
        BuyOneGetOneDiscount::free_for_all().into(),
        BuyOneGetOneDiscount::free_in("Electronics").into(),
        BuyOneGetOneDiscount::new(Some("Clothing".to_string()), Decimal::new(50, 0))?.into(),
        BuyOneGetOneDiscount::free_in("Books").into(),
    ];

    let rows = price_rules(&mut cart, rules);

    writeln!(out, "{}", table(["Rule", "Discount", "Total"], rows, 1..3))?;

    Ok(())
}

fn minimum_amounts(out: &mut impl Write) -> anyhow::Result<()> {
    section(out, "4. MINIMUM AMOUNT REQUIREMENTS")?;

    let mut cart = Cart::new();
    cart.add_item(LineItem::single("Smartphone", Decimal::new(699_99, 2), "Electronics")?);
    cart.add_item(LineItem::single("Phone Case", Decimal::new(24_99, 2), "Electronics")?);

    writeln!(out, "Cart subtotal: {}", format_amount(cart.subtotal()))?;

    let rules: Vec<Discount> = vec![
        PercentageDiscount::new(Decimal::new(15, 0), Decimal::new(500, 0))?.into(),
        PercentageDiscount::new(Decimal::new(20, 0), Decimal::new(800, 0))?.into(),
        FixedAmountDiscount::new(Decimal::new(50, 0), Decimal::new(600, 0))?.into(),
        FixedAmountDiscount::new(Decimal::ONE_HUNDRED, Decimal::new(1000, 0))?.into(),
    ];

    let rows = rules
        .into_iter()
        .map(|rule| {
            let name = rule.name();

            cart.set_rule(rule);

            let discount = cart.discount();
            let qualifies = if discount > Decimal::ZERO { "yes" } else { "no" };

            [
                name,
                qualifies.to_string(),
                format_amount(discount),
                format_amount(cart.total()),
            ]
        })
        .collect();

    writeln!(
        out,
        "{}",
        table(["Rule", "Qualifies", "Discount", "Total"], rows, 2..4)
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn render() -> anyhow::Result<String> {
        let mut out = Vec::new();

        run(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_every_section() -> TestResult {
        let output = render()?;

        for heading in [
            "1. RULE SWITCHING",
            "2. ORDER SIZE SCENARIOS",
            "3. BUY ONE GET ONE",
            "4. MINIMUM AMOUNT REQUIREMENTS",
        ] {
            assert!(output.contains(heading), "missing {heading}");
        }

        Ok(())
    }

    #[test]
    fn prints_rule_names_and_amounts() -> TestResult {
        let output = render()?;

        assert!(output.contains("Cart subtotal: $1054.97"));
        assert!(output.contains("Buy One Get One Free (Electronics)"));
        assert!(output.contains("Buy One Get One 50% Off (Clothing)"));
        assert!(output.contains("Fixed Discount > Order Total"));
        assert!(output.contains("= $229.93"));

        Ok(())
    }
}
