
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use facture_rs::breakdown::{build_breakdown, RowKind};
use facture_rs::ShippingCharge;
use test_utils::item;

#[test]
fn line_totals_match_the_worked_example() {
    test_utils::do_setup();
    let items = vec![
        item("USB-C cable", 2, dec!(45.99), dec!(20.0)),
        item("Phone stand", 1, dec!(25.50), dec!(20.0)),
    ];

    let body = build_breakdown(&items, None);

    assert_eq!(body.rows.len(), 2);
    assert_eq!(body.rows[0].total_incl, dec!(110.376));
    assert_eq!(body.rows[1].total_incl, dec!(30.60));
    assert_eq!(body.grand_total, dec!(140.976));

    // Single 20 % bucket.
    assert_eq!(body.tax_breakdown.len(), 1);
    let bucket = body.tax_breakdown[&dec!(20.0)];
    assert_eq!(bucket.taxable, dec!(117.48));
    assert_eq!(bucket.tax, dec!(23.496));
}

#[test]
fn bucket_sums_equal_grand_total() {
    test_utils::do_setup();
    let items = vec![
        item("Book", 3, dec!(12.90), dec!(5.5)),
        item("Lamp", 1, dec!(89.00), dec!(20.0)),
        item("Poster", 2, dec!(7.25), dec!(0)),
    ];
    let shipping = ShippingCharge::new(dec!(6.99), dec!(20.0)).with_discount_percent(dec!(50));

    let body = build_breakdown(&items, Some(&shipping));

    assert_eq!(body.bucket_total(), body.grand_total);
}

#[test]
fn display_order_is_insertion_order() {
    test_utils::do_setup();
    let items = vec![
        item("Zebra print", 1, dec!(30.00), dec!(20.0)),
        item("Aardvark mug", 1, dec!(10.00), dec!(20.0)),
    ];

    let body = build_breakdown(&items, None);

    let descriptions: Vec<_> = body
        .rows
        .iter()
        .map(|row| match &row.kind {
            RowKind::Item { description, .. } => description.as_str(),
            _ => panic!("unexpected non-item row"),
        })
        .collect();
    assert_eq!(descriptions, ["Zebra print", "Aardvark mug"]);
}

#[test]
fn rates_bucket_by_numeric_value() {
    test_utils::do_setup();
    let items = vec![
        item("A", 1, dec!(10.00), dec!(20.0)),
        item("B", 1, dec!(10.00), dec!(20.00)),
        item("C", 1, dec!(10.00), dec!(20.01)),
    ];

    let body = build_breakdown(&items, None);

    // 20.0 and 20.00 collide; 20.01 gets its own bucket.
    assert_eq!(body.tax_breakdown.len(), 2);
    assert_eq!(body.tax_breakdown[&dec!(20.0)].taxable, dec!(20.00));
    assert_eq!(body.tax_breakdown[&dec!(20.01)].taxable, dec!(10.00));
}

#[test]
fn breakdown_rows_sort_ascending_by_rate() {
    test_utils::do_setup();
    let items = vec![
        item("High", 1, dec!(10.00), dec!(20.0)),
        item("None", 1, dec!(10.00), dec!(0)),
        item("Low", 1, dec!(10.00), dec!(5.5)),
    ];

    let body = build_breakdown(&items, None);

    let rates: Vec<Decimal> = body.tax_breakdown.keys().copied().collect();
    assert_eq!(rates, vec![dec!(0), dec!(5.5), dec!(20.0)]);
}

#[test]
fn aggregation_is_idempotent() {
    test_utils::do_setup();
    let items = vec![
        item("Book", 3, dec!(12.90), dec!(5.5)),
        item("Lamp", 1, dec!(89.00), dec!(20.0)),
    ];
    let shipping = ShippingCharge::new(dec!(4.99), dec!(20.0)).with_discount_percent(dec!(10));

    let first = build_breakdown(&items, Some(&shipping));
    let second = build_breakdown(&items, Some(&shipping));

    assert_eq!(first, second);
}

#[test]
fn empty_invoice_aggregates_to_zero() {
    test_utils::do_setup();
    let body = build_breakdown(&[], None);
    assert!(body.rows.is_empty());
    assert!(body.tax_breakdown.is_empty());
    assert_eq!(body.grand_total, Decimal::ZERO);
}

#[test]
fn negative_prices_propagate_rather_than_fail() {
    test_utils::do_setup();
    // Validation belongs to the form layer; the aggregator just computes.
    let items = vec![item("Refund line", 1, dec!(-10.00), dec!(20.0))];
    let body = build_breakdown(&items, None);
    assert_eq!(body.grand_total, dec!(-12.00));
    assert_eq!(body.bucket_total(), body.grand_total);
}
