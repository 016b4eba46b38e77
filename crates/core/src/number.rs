//! Property Evaluator: elementary numeric properties of a signed integer.
//!
//! Every function here is pure and total over `i64`. Magnitudes are taken
//! with [`i64::unsigned_abs`] so `i64::MIN` needs no special casing, and
//! accumulators that can exceed the input range use `u128`.

// ---------------------------------------------------------------------------
// Property tags
// ---------------------------------------------------------------------------

/// Tag added to `properties` for Armstrong numbers.
pub const PROPERTY_ARMSTRONG: &str = "armstrong";
/// Tag added to `properties` for negative numbers.
pub const PROPERTY_NEGATIVE: &str = "negative";

// ---------------------------------------------------------------------------
// Parity
// ---------------------------------------------------------------------------

/// Parity of an integer, rendered as `"odd"` / `"even"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

// ---------------------------------------------------------------------------
// Property checks
// ---------------------------------------------------------------------------

/// Trial-division primality test.
///
/// Candidates are restricted to 2, 3 and numbers of the form `6k ± 1` up to
/// `floor(sqrt(n))`; every other divisor would imply a smaller one already
/// tested.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n.unsigned_abs();
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut candidate: u64 = 5;
    let mut step: u64 = 2;
    while candidate <= n / candidate {
        if n % candidate == 0 {
            return false;
        }
        candidate += step;
        step = 6 - step;
    }
    true
}

/// Whether `n` equals the sum of its proper positive divisors.
///
/// `1` is not perfect; nothing below `1` is.
pub fn is_perfect(n: i64) -> bool {
    if n < 1 {
        return false;
    }
    let n = n.unsigned_abs();
    divisor_sum(n) == 2 * u128::from(n)
}

/// Primality and perfection of `n` from a single factorization.
///
/// With σ(n) the sum of all positive divisors, `n` is prime iff
/// σ(n) = n + 1 (for `n > 1`) and perfect iff σ(n) = 2n. Agrees with
/// [`is_prime`] and [`is_perfect`] while scanning candidate divisors once.
pub fn prime_and_perfect(n: i64) -> (bool, bool) {
    if n < 1 {
        return (false, false);
    }
    let n = n.unsigned_abs();
    let sigma = divisor_sum(n);
    let n = u128::from(n);
    (n > 1 && sigma == n + 1, sigma == 2 * n)
}

/// Whether `n` equals the sum of its decimal digits each raised to the
/// power of the digit count. Negative numbers are never Armstrong.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = decimal_digits(n.unsigned_abs());
    let power = digits.len() as u32;
    let total: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    total == u128::from(n.unsigned_abs())
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u64 {
    decimal_digits(n.unsigned_abs())
        .into_iter()
        .map(u64::from)
        .sum()
}

/// Parity of `|n|`.
pub fn parity(n: i64) -> Parity {
    if n.unsigned_abs() % 2 != 0 {
        Parity::Odd
    } else {
        Parity::Even
    }
}

/// Ordered property tags: `"armstrong"` (when applicable) then the parity.
pub fn properties(n: i64) -> Vec<&'static str> {
    let mut tags = Vec::with_capacity(2);
    if is_armstrong(n) {
        tags.push(PROPERTY_ARMSTRONG);
    }
    tags.push(parity(n).as_str());
    tags
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Decimal digits of `n`, most significant first. `0` yields `[0]`.
fn decimal_digits(mut n: u64) -> Vec<u8> {
    let mut digits = Vec::with_capacity(20);
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Sum of all positive divisors of `n` (including `n` itself), computed from
/// its prime factorization as the product of `1 + p + ... + p^k`.
fn divisor_sum(n: u64) -> u128 {
    let mut remaining = n;
    let mut sigma: u128 = 1;

    for prime in [2, 3] {
        sigma *= strip_factor(&mut remaining, prime);
    }

    let mut candidate: u64 = 5;
    let mut step: u64 = 2;
    while candidate <= remaining / candidate {
        sigma *= strip_factor(&mut remaining, candidate);
        candidate += step;
        step = 6 - step;
    }

    if remaining > 1 {
        sigma *= u128::from(remaining) + 1;
    }
    sigma
}

/// Divide every power of `factor` out of `remaining`, returning the
/// geometric sum `1 + factor + ... + factor^k` for the removed power.
fn strip_factor(remaining: &mut u64, factor: u64) -> u128 {
    let mut term: u128 = 1;
    let mut power: u128 = 1;
    while *remaining % factor == 0 {
        *remaining /= factor;
        power *= u128::from(factor);
        term += power;
    }
    term
}
