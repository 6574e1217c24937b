//! Modular arithmetic for the multiplicative and affine ciphers.

/// Greatest common divisor (always non-negative)
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Smallest `x` in `[1, m)` with `(a * x) mod m == 1`, or `None` when
/// `gcd(a, m) != 1`.
///
/// A linear search is plenty for the fixed modulus of 26.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 1 {
        return None;
    }
    let a = a.rem_euclid(m);
    (1..m).find(|&x| (a * x) % m == 1)
}
