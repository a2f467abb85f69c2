use approx::assert_abs_diff_eq;
use primkit_math::{Normalize, Quaternion};

fn samples() -> Vec<Quaternion<f64>> {
    vec![
        Quaternion::new(1.0, 2.0, 3.0, 4.0),
        Quaternion::new(-0.5, 0.25, 2.0, -1.0),
        Quaternion::new(0.0, 0.0, 0.7071067811865476, 0.7071067811865476),
        Quaternion::new(0.3, -0.1, 0.0, 0.95),
    ]
}

fn row_product(a: Quaternion<f64>, b: Quaternion<f64>) -> Quaternion<f64> {
    Quaternion::new(
        a.y * b.z - a.z * b.y + a.w * b.x + a.x * b.w,
        a.x * b.z - a.z * b.x + a.w * b.y + a.y * b.w,
        a.x * b.y - a.y * b.x + a.w * b.z + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
}

#[test]
fn test_every_product_form_follows_rows() {
    for a in samples() {
        for b in samples() {
            let expected = row_product(a, b);
            assert!((a * b).is_strictly_equal_to(expected), "{a} * {b}");
            assert!(a.product(b).is_strictly_equal_to(expected));

            let mut at = a;
            at.multiply_in_place(b);
            assert!(at.is_strictly_equal_to(expected));

            let mut set = Quaternion::<f64>::ZERO;
            set.set_product_of(a, b);
            assert!(set.is_strictly_equal_to(expected));
        }
    }
}

#[test]
fn test_non_parallel_products_do_not_commute() {
    let samples = samples();
    for (i, &a) in samples.iter().enumerate() {
        for &b in &samples[i + 1..] {
            assert!(!(a * b).is_equal_to(b * a), "{a} and {b} commute");
        }
    }
}

#[test]
fn test_parallel_vector_parts_commute() {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(-2.0, -4.0, -6.0, 0.5);
    assert!((a * b).is_equal_to(b * a));
}

#[test]
fn test_unit_times_conjugate_is_identity() {
    for q in samples() {
        let unit = q.normalized();
        assert!(unit.is_unit());
        assert!((unit * unit.conjugated()).is_equal_to(Quaternion::IDENTITY));
        assert!((unit * -unit).is_equal_to(Quaternion::IDENTITY));
    }
}

#[test]
fn test_scalar_part_of_product() {
    let s = samples();
    let p = s[0] * s[1];
    let expected_w = s[0].w * s[1].w - (s[0].x * s[1].x + s[0].y * s[1].y + s[0].z * s[1].z);
    assert_abs_diff_eq!(p.w, expected_w, epsilon = 1e-12);
}

#[test]
fn test_accumulated_product_in_place() {
    let s = samples();
    let mut acc = Quaternion::<f64>::IDENTITY;
    for q in &s {
        acc.multiply_in_place(*q);
    }
    let expected = s[0] * s[1] * s[2] * s[3];
    assert!(acc.is_strictly_equal_to(expected));
}
