//! Number classification
//!
//! Pure predicates over a signed 64-bit integer: primality, perfection,
//! Armstrong-ness, parity and digit sum. Everything here is deterministic and
//! overflow-free across the whole `i64` range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property tag reported in the `properties` array
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Even,
    Odd,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Armstrong => "armstrong",
            Property::Even => "even",
            Property::Odd => "odd",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the classifier knows about a number
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub is_armstrong: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
}

/// Classify a number
///
/// `properties` is `[armstrong, parity]` for Armstrong numbers and `[parity]`
/// otherwise. Clients depend on that order.
pub fn classify(n: i64) -> Classification {
    let is_armstrong = is_armstrong(n);

    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        is_armstrong,
        properties: properties(n, is_armstrong),
        digit_sum: digit_sum(n),
    }
}

fn properties(n: i64, is_armstrong: bool) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong {
        properties.push(Property::Armstrong);
    }
    properties.push(parity(n));
    properties
}

/// `Even` when `n % 2 == 0`, `Odd` otherwise (negative odd numbers included)
pub fn parity(n: i64) -> Property {
    if n % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    }
}

/// True when `n > 1` has no divisor in `[2, floor(sqrt(n))]`
///
/// Small candidates are settled by trial division against the first primes;
/// the rest use Miller-Rabin with the twelve prime bases up to 37, which is
/// exact for every 64-bit integer.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let n = n as u64;
    for p in MILLER_RABIN_BASES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    if n < 41 * 41 {
        return true;
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for a in MILLER_RABIN_BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// True when the proper positive divisors of `n` sum to `n`
///
/// Uses the Euclid-Euler form: an even `n` is perfect exactly when
/// `n = 2^(p-1) * (2^p - 1)` with `2^p - 1` prime. No odd perfect number
/// exists below 10^1500, so odd `n` in the `i64` range never is.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 || n % 2 != 0 {
        return false;
    }

    let n = n as u64;
    let power = n.trailing_zeros();
    let odd_part = n >> power;

    // 2^(power + 1) - 1, checked so a huge power of two cannot overflow
    let Some(mersenne) = 1u64
        .checked_shl(power + 1)
        .and_then(|v| v.checked_sub(1))
    else {
        return false;
    };

    odd_part == mersenne && is_prime(mersenne as i64)
}

/// True when the sum of each digit raised to the digit count equals `n`
///
/// Negative numbers are never Armstrong numbers.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let digits = digits(n);
    let power = digits.len() as u32;
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();

    sum == n as u128
}

/// Sum of the decimal digits of `|n|`
pub fn digit_sum(n: i64) -> u64 {
    digits(n).iter().map(|&d| d as u64).sum()
}

/// Decimal digits of `|n|`, most significant first
///
/// Zero has a single digit.
pub fn digits(n: i64) -> Vec<u32> {
    let mut value = n.unsigned_abs();
    if value == 0 {
        return vec![0];
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push((value % 10) as u32);
        value /= 10;
    }
    digits.reverse();
    digits
}
