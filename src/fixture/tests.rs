use super::*;

use alloc::string::ToString;
use alloc::vec;

fn g17(v: f64) -> String {
    format_general(v, 17)
}

fn g9(v: f32) -> String {
    format_general(v as f64, 9)
}

#[test]
fn integers_print_without_point() {
    assert_eq!(g17(0.0), "0");
    assert_eq!(g17(10.0), "10");
    assert_eq!(g17(-110.0), "-110");
    assert_eq!(g17(123456.0), "123456");
    assert_eq!(g17(1e16), "10000000000000000");
    assert_eq!(g9(16_777_216.0), "16777216");
}

#[test]
fn exponent_switches_at_precision() {
    assert_eq!(g17(1e16), "10000000000000000");
    assert_eq!(g17(1e17), "1e+17");
    assert_eq!(g17(1e21), "1e+21");
    assert_eq!(g9(1e10), "1e+10");
    assert_eq!(g17(f64::MAX), "1.7976931348623157e+308");
    assert_eq!(g9(f32::MAX), "3.40282347e+38");
}

#[test]
fn small_magnitudes() {
    assert_eq!(g17(0.0001), "0.0001");
    assert_eq!(g17(1.234e-5), "1.234e-05");
    assert_eq!(g17(9.5e-5), "9.5000000000000005e-05");
    assert_eq!(g17(2.2250738585072014e-308), "2.2250738585072014e-308");
    assert_eq!(g17(5e-324), "4.9406564584124654e-324");
    assert_eq!(g9(1e-45), "1.40129846e-45");
}

#[test]
fn round_trip_digits_expose_binary_error() {
    assert_eq!(g17(0.1), "0.10000000000000001");
    assert_eq!(g17(0.3), "0.29999999999999999");
    assert_eq!(g17(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(g17(1.0 / 3.0), "0.33333333333333331");
    assert_eq!(g9(0.1), "0.100000001");
    assert_eq!(g9(0.3), "0.300000012");
    assert_eq!(g9(0.01), "0.00999999978");
}

#[test]
fn signed_zero_and_non_finite() {
    assert_eq!(g17(-0.0), "-0");
    assert_eq!(g9(-0.0), "-0");
    assert_eq!(g17(f64::INFINITY), "inf");
    assert_eq!(g17(f64::NEG_INFINITY), "-inf");
    assert_eq!(g17(f64::NAN), "nan");
    assert_eq!(g17(-f64::NAN), "-nan");
}

#[test]
fn rendered_values_parse_back_bit_exact() {
    let values = [
        0.1,
        -7.770539987666108e-17,
        999999999999999.88,
        f64::MIN_POSITIVE,
        f64::MAX / 2.0,
        core::f64::consts::PI,
    ];
    for v in values {
        let text = g17(v);
        assert_eq!(text.parse::<f64>().unwrap().to_bits(), v.to_bits(), "{text}");
    }

    let values32 = [0.1_f32, 1e-10, f32::MIN_POSITIVE, f32::MAX / 2.0, 1e15];
    for v in values32 {
        let text = g9(v);
        assert_eq!(text.parse::<f32>().unwrap().to_bits(), v.to_bits(), "{text}");
    }
}

#[test]
fn write_general_appends_to_sink() {
    let mut out = String::from("x=");
    write_general(&mut out, 2.5, 17).unwrap();
    assert_eq!(out, "x=2.5");
}

#[test]
fn vector_literals() {
    let v = Fixture::vector("a", &[1.0_f64, 2.0, 3.0]);
    assert_eq!(v.to_string(), "a := []float64{1, 2, 3}");

    let v = Fixture::vector("absSpecial32", &[0.0_f32, 1.0, f32::MIN_POSITIVE]);
    assert_eq!(
        v.to_string(),
        "absSpecial32 := []float32{0, 1, 1.17549435e-38}"
    );

    let empty: [f64; 0] = [];
    assert_eq!(Fixture::vector("e", &empty).to_string(), "e := []float64{}");
}

#[test]
fn scalar_literals_by_width() {
    assert_eq!(Fixture::scalar("dotProduct", 10.0_f64).to_string(), "dotProduct := 10");
    assert_eq!(
        Fixture::scalar("dotProduct32", 10.0_f32).to_string(),
        "dotProduct32 := float32(10)"
    );
    assert_eq!(
        Fixture::scalar("maxSpecial", f64::MAX / 2.0).to_string(),
        "maxSpecial := 8.9884656743115785e+307"
    );
    assert_eq!(
        Fixture::scalar("maxSpecial32", f32::MAX / 2.0).to_string(),
        "maxSpecial32 := float32(1.70141173e+38)"
    );
}

#[test]
fn value_keeps_width() {
    let v = Value::vector(&[0.1_f32]);
    assert_eq!(v.width(), Width::F32);
    // Widening preserves the f32 value exactly.
    assert_eq!(
        v,
        Value::Vector {
            width: Width::F32,
            data: vec![0.1_f32 as f64],
        }
    );
    assert_eq!(Value::scalar(1.0_f64).width(), Width::F64);
}

#[test]
fn lines_render() {
    assert_eq!(Line::Comment("float64, n=3".into()).to_string(), "// float64, n=3");
    assert_eq!(Line::Blank.to_string(), "");
    let line: Line = Fixture::scalar("sum", 6.0_f64).into();
    assert_eq!(line.to_string(), "sum := 6");
}
