use value_pool::{format_value, print_value};

#[test]
fn rendering_is_a_pure_function() {
    assert_eq!(format_value(3.5), "3.5");
    assert_eq!(format_value(3.5), "3.5");
}

#[test]
fn finite_decimal_approximations() {
    assert_eq!(format_value(0.1), "0.1");
    assert_eq!(format_value(1.0), "1");
    assert_eq!(format_value(-42.0), "-42");
    assert_eq!(format_value(2.5e-4), "0.00025");
}

#[test]
fn zero_keeps_its_sign() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(-0.0), "-0");
}

#[test]
fn non_finite_values_are_distinguishable() {
    let nan = format_value(f64::NAN);
    let inf = format_value(f64::INFINITY);
    let neg_inf = format_value(f64::NEG_INFINITY);

    assert_eq!(nan, "NaN");
    assert_eq!(inf, "inf");
    assert_eq!(neg_inf, "-inf");
    assert_ne!(inf, neg_inf);
}

#[test]
fn large_and_tiny_magnitudes_go_scientific() {
    assert_eq!(format_value(1e20), "1e20");
    assert_eq!(format_value(-1e20), "-1e20");
    assert_eq!(format_value(6.02e23), "6.02e23");
    assert_eq!(format_value(1e-9), "1e-9");
}

#[test]
fn print_writes_the_same_rendering_to_the_sink() {
    let mut sink = Vec::new();
    print_value(&mut sink, 2.75).unwrap();
    print_value(&mut sink, f64::NAN).unwrap();

    assert_eq!(sink, b"2.75NaN");
}
