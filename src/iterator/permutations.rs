use itertools::Itertools;
use log::debug;

use crate::expression::Number;
use crate::solver::constants::MIN_NUMBERS;

/// Every ordered arrangement of 2..=N numbers drawn by position.
///
/// Equal values at different positions are distinct, so a multiset with duplicates
/// yields sequences that repeat by value. Shorter sequences come first.
pub fn sequences(numbers: &[Number]) -> impl Iterator<Item = Vec<Number>> + Send + use<> {
    let numbers = numbers.to_vec();
    debug!(
        "Enumerating arrangements of length {}..={} from {} numbers",
        MIN_NUMBERS,
        numbers.len(),
        numbers.len()
    );

    (MIN_NUMBERS..=numbers.len())
        .flat_map(move |length| numbers.clone().into_iter().permutations(length))
}

/// Like [`sequences`], but each sequence of values appears only once
pub fn distinct_sequences(
    numbers: &[Number],
) -> impl Iterator<Item = Vec<Number>> + Send + use<> {
    sequences(numbers).unique()
}
