
use rust_decimal_macros::dec;

use facture_rs::breakdown::{build_breakdown, RowKind};
use facture_rs::{compute_shipping, ShippingCharge};
use test_utils::item;

#[test]
fn zero_base_emits_no_rows_and_contributes_nothing() {
    test_utils::do_setup();
    let items = vec![item("Book", 1, dec!(10.00), dec!(20.0))];
    let shipping = ShippingCharge::new(dec!(0), dec!(20.0)).with_discount_percent(dec!(50));

    let with = build_breakdown(&items, Some(&shipping));
    let without = build_breakdown(&items, None);

    assert_eq!(with, without);
    assert_eq!(with.rows.len(), 1);
}

#[test]
fn undiscounted_shipping_emits_a_single_row() {
    test_utils::do_setup();
    let shipping = ShippingCharge::new(dec!(4.99), dec!(20.0));

    let body = build_breakdown(&[], Some(&shipping));

    assert_eq!(body.rows.len(), 1);
    assert_eq!(body.rows[0].kind, RowKind::Shipping);
    assert_eq!(body.rows[0].unit_price_excl, dec!(4.99));
    assert_eq!(body.grand_total, dec!(5.988));
}

#[test]
fn discounted_shipping_emits_full_price_then_negative_discount_row() {
    test_utils::do_setup();
    let shipping = ShippingCharge::new(dec!(100), dec!(20)).with_discount_percent(dec!(10));

    let body = build_breakdown(&[], Some(&shipping));

    assert_eq!(body.rows.len(), 2);
    assert_eq!(body.rows[0].kind, RowKind::Shipping);
    assert_eq!(body.rows[0].total_incl, dec!(120));
    assert_eq!(body.rows[1].kind, RowKind::ShippingDiscount);
    assert_eq!(body.rows[1].unit_price_excl, dec!(-10));
    assert_eq!(body.rows[1].total_incl, dec!(-12));

    // The two rows net out to the discounted tax-inclusive total.
    assert_eq!(body.grand_total, dec!(108));
}

#[test]
fn breakdown_only_sees_net_shipping_amounts() {
    test_utils::do_setup();
    // base 100, 20 % tax, 10 % discount => 90 excl + 18 tax.
    let shipping = ShippingCharge::new(dec!(100), dec!(20)).with_discount_percent(dec!(10));

    let body = build_breakdown(&[], Some(&shipping));

    let bucket = body.tax_breakdown[&dec!(20)];
    assert_eq!(bucket.taxable, dec!(90));
    assert_eq!(bucket.tax, dec!(18));
    assert_eq!(body.bucket_total(), body.grand_total);
}

#[test]
fn shipping_folds_into_the_matching_item_bucket() {
    test_utils::do_setup();
    let items = vec![item("Lamp", 1, dec!(50.00), dec!(20.0))];
    let shipping = ShippingCharge::new(dec!(10.00), dec!(20.0)).with_discount_percent(dec!(10));

    let body = build_breakdown(&items, Some(&shipping));

    assert_eq!(body.tax_breakdown.len(), 1);
    let bucket = body.tax_breakdown[&dec!(20.0)];
    assert_eq!(bucket.taxable, dec!(59.00));
    assert_eq!(bucket.tax, dec!(11.80));
}

#[test]
fn oversized_discount_rows_still_net_to_the_grand_total() {
    test_utils::do_setup();
    // Out-of-contract input: the discount row is capped at the base, so the
    // visible rows agree with the (floored-at-zero) net total.
    let shipping = ShippingCharge::new(dec!(10), dec!(20)).with_discount_percent(dec!(150));

    let body = build_breakdown(&[], Some(&shipping));

    assert_eq!(body.rows.len(), 2);
    assert_eq!(body.rows[1].unit_price_excl, dec!(-10));
    let rows_total: rust_decimal::Decimal = body.rows.iter().map(|row| row.total_incl).sum();
    assert_eq!(rows_total, body.grand_total);
    assert_eq!(body.grand_total, dec!(0));
    assert_eq!(body.bucket_total(), body.grand_total);
}

#[test]
fn shipping_amounts_match_the_policy() {
    test_utils::do_setup();
    let amounts =
        compute_shipping(&ShippingCharge::new(dec!(100), dec!(20)).with_discount_percent(dec!(10)));
    assert_eq!(amounts.discount, dec!(10));
    assert_eq!(amounts.discounted_base, dec!(90));
    assert_eq!(amounts.tax, dec!(18));
    assert_eq!(amounts.total_incl, dec!(108));
}
