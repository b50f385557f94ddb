//! Money rounding, arithmetic and serialization.

use stackcost_sdk::Money;

#[test]
fn rounds_half_up_to_cents() {
    assert_eq!(Money::from_amount(0.875).cents(), 88);
    assert_eq!(Money::from_amount(0.125).cents(), 13);
    assert_eq!(Money::from_amount(57.5).cents(), 5750);
    assert_eq!(Money::from_amount(0.004).cents(), 0);
}

#[test]
fn non_finite_amounts_are_zero() {
    assert_eq!(Money::from_amount(f64::NAN), Money::ZERO);
    assert_eq!(Money::from_amount(f64::INFINITY), Money::ZERO);
    assert_eq!(Money::from_amount(f64::NEG_INFINITY), Money::ZERO);
}

#[test]
fn display_has_two_decimals() {
    assert_eq!(Money::from_cents(0).to_string(), "0.00");
    assert_eq!(Money::from_cents(5).to_string(), "0.05");
    assert_eq!(Money::from_cents(5750).to_string(), "57.50");
    assert_eq!(Money::from_cents(-130).to_string(), "-1.30");
}

#[test]
fn sums_exactly_in_cents() {
    let parts = [
        Money::from_amount(0.1),
        Money::from_amount(0.2),
        Money::from_amount(0.3),
    ];
    let total: Money = parts.iter().sum();
    assert_eq!(total.cents(), 60);
    assert_eq!(total.amount(), 0.6);

    let mut running = Money::ZERO;
    for part in parts {
        running += part;
    }
    assert_eq!(running, total);
}

#[test]
fn serializes_as_plain_number() {
    let json = serde_json::to_string(&Money::from_cents(5750)).unwrap();
    assert_eq!(json, "57.5");

    let back: Money = serde_json::from_str("12.615").unwrap();
    assert_eq!(back.cents(), 1262);
}

#[test]
fn is_zero() {
    assert!(Money::ZERO.is_zero());
    assert!(Money::default().is_zero());
    assert!(!Money::from_cents(1).is_zero());
}

#[test]
fn out_of_range_amounts_clamp_and_sums_saturate() {
    let huge = Money::from_amount(1e20);
    assert_eq!(huge, Money::MAX);

    assert_eq!(huge + huge, Money::MAX);
    assert_eq!(huge + Money::from_cents(1), Money::MAX);

    let mut running = huge;
    running += huge;
    assert_eq!(running, Money::MAX);

    let total: Money = [huge, huge, Money::from_cents(5)].iter().sum();
    assert_eq!(total, Money::MAX);
}
