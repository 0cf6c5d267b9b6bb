//! Single number finders used to demonstrate the framework.
//!
//! Every number of the input appears exactly twice except for one, which is
//! the number to find. `0` is returned if there is no such number.

use std::collections::HashSet;

/// Fold the numbers with a bitwise exclusive or.
#[must_use]
pub fn xor(nums: Vec<i32>) -> i32 {
    nums.into_iter().fold(0, |acc, x| acc ^ x)
}

/// Sum of all numbers.
#[must_use]
pub fn sum(nums: Vec<i32>) -> i32 {
    nums.into_iter().sum()
}

/// Twice the sum of the distinct numbers minus the sum of all numbers.
///
/// `sum` is called twice: once for the distinct numbers (in order of their
/// first appearance) and once for all numbers.
pub fn sum_based<S>(sum: S, nums: &[i32]) -> i32
where
    S: Fn(Vec<i32>) -> i32,
{
    let mut seen = HashSet::new();
    let distinct = nums
        .iter()
        .copied()
        .filter(|x| seen.insert(*x))
        .collect::<Vec<_>>();

    2 * sum(distinct) - sum(nums.to_vec())
}
