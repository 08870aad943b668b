use crate::utils::error::{DemoError, Result};

/// Recursive factorial with checked multiplication.
pub fn factorial(n: u32) -> Result<u64> {
    if n <= 1 {
        return Ok(1);
    }
    factorial(n - 1)?
        .checked_mul(u64::from(n))
        .ok_or_else(|| DemoError::overflow(format!("factorial({})", n)))
}

/// Sums `numbers` but skips index 0. This is the planted bug of the debug demo.
pub fn buggy_sum(numbers: &[i32]) -> i64 {
    numbers.iter().skip(1).map(|&n| i64::from(n)).sum()
}

/// The fixed sum, for comparison with [`buggy_sum`].
pub fn correct_sum(numbers: &[i32]) -> i64 {
    numbers.iter().map(|&n| i64::from(n)).sum()
}

/// Largest element, or `0` for an empty slice.
pub fn find_max(numbers: &[i32]) -> i32 {
    numbers.iter().copied().max().unwrap_or(0)
}

pub fn count_up(limit: u32) -> impl Iterator<Item = u32> {
    0..limit
}

/// Joins items with a trailing space after each one: `"5 2 9 "`.
pub fn space_terminated<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().fold(String::new(), |mut acc, item| {
        acc.push_str(&item.to_string());
        acc.push(' ');
        acc
    })
}
