use crate::domain::coins::CoinSet;
use crate::error::CoreError;

/// Returns the fewest coins from `coins` that sum to `amount`, sorted ascending.
///
/// Denominations may be given in any order. An amount of zero needs no coins,
/// whatever the coin set.
pub fn find_fewest_coins(coins: &[i64], amount: i64) -> Result<Vec<i64>, CoreError> {
    if amount < 0 {
        return Err(CoreError::NegativeAmount);
    }
    if amount == 0 {
        return Ok(Vec::new());
    }

    CoinSet::new(coins)?.fewest_coins(amount)
}

pub(crate) fn solve_fewest_coins(
    denominations: &CoinSet,
    amount: i64,
) -> Result<Vec<i64>, CoreError> {
    if amount < 0 {
        return Err(CoreError::NegativeAmount);
    }
    if amount == 0 {
        return Ok(Vec::new());
    }

    match denominations.smallest() {
        Some(smallest) if smallest <= amount => {}
        _ => return Err(CoreError::NoCoinSmallEnough),
    }
    let coins = denominations.as_slice();

    let target = usize::try_from(amount).map_err(|_| CoreError::AmountTooLarge(amount))?;

    // best[n] = (coin count, last coin used) for the cheapest way to reach n.
    let mut best: Vec<Option<(usize, i64)>> = Vec::new();
    let cells = target
        .checked_add(1)
        .ok_or(CoreError::AmountTooLarge(amount))?;
    best.try_reserve_exact(cells)
        .map_err(|_| CoreError::AmountTooLarge(amount))?;
    best.push(Some((0, 0)));

    for sub in 1..=target {
        let mut cell: Option<(usize, i64)> = None;
        for &coin in coins {
            let Ok(step) = usize::try_from(coin) else {
                break;
            };
            if step > sub {
                break;
            }
            if let Some((count, _)) = best[sub - step] {
                if cell.map_or(true, |(current, _)| count + 1 < current) {
                    cell = Some((count + 1, coin));
                }
            }
        }
        best.push(cell);
    }

    let Some((count, _)) = best[target] else {
        return Err(CoreError::NoCombination);
    };

    let mut change = Vec::with_capacity(count);
    let mut remaining = target;
    while remaining > 0 {
        let Some((_, coin)) = best[remaining] else {
            return Err(CoreError::NoCombination);
        };
        change.push(coin);
        remaining -= coin as usize;
    }

    change.sort_unstable();
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::find_fewest_coins;
    use crate::error::CoreError;

    #[test]
    fn change_for_zero_is_empty() {
        assert_eq!(find_fewest_coins(&[1], 0).unwrap(), Vec::<i64>::new());
        assert_eq!(find_fewest_coins(&[], 0).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn change_single_coin() {
        assert_eq!(find_fewest_coins(&[1, 5, 10, 25, 100], 25).unwrap(), vec![25]);
    }

    #[test]
    fn change_multiple_coins() {
        assert_eq!(find_fewest_coins(&[1, 5, 10, 25, 100], 15).unwrap(), vec![5, 10]);
        assert_eq!(
            find_fewest_coins(&[1, 5, 10, 25], 41).unwrap(),
            vec![1, 5, 10, 25]
        );
    }

    #[test]
    fn change_beats_greedy_with_non_canonical_coins() {
        assert_eq!(
            find_fewest_coins(&[1, 4, 15, 20, 50], 23).unwrap(),
            vec![4, 4, 15]
        );
        assert_eq!(
            find_fewest_coins(&[1, 5, 10, 21, 25], 63).unwrap(),
            vec![21, 21, 21]
        );
    }

    #[test]
    fn change_without_unit_coin() {
        assert_eq!(
            find_fewest_coins(&[2, 5, 10, 20, 50], 21).unwrap(),
            vec![2, 2, 2, 5, 10]
        );
        assert_eq!(
            find_fewest_coins(&[4, 5], 27).unwrap(),
            vec![4, 4, 4, 5, 5, 5]
        );
    }

    #[test]
    fn change_large_target() {
        let change = find_fewest_coins(&[1, 2, 5, 10, 20, 50, 100], 999).unwrap();
        assert_eq!(change.len(), 15);
        assert_eq!(change.iter().sum::<i64>(), 999);
        assert!(change.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn change_accepts_unsorted_coins() {
        assert_eq!(
            find_fewest_coins(&[25, 10, 5, 1], 41).unwrap(),
            vec![1, 5, 10, 25]
        );
    }

    #[test]
    fn change_rejects_negative_amount() {
        let err = find_fewest_coins(&[1, 2, 5], -5).unwrap_err();
        assert_eq!(err, CoreError::NegativeAmount);
        assert_eq!(err.to_string(), "Cannot make change for negative value");
    }

    #[test]
    fn change_rejects_amount_below_smallest_coin() {
        let err = find_fewest_coins(&[5, 10], 3).unwrap_err();
        assert_eq!(err, CoreError::NoCoinSmallEnough);
        assert_eq!(err.to_string(), "No coins small enough to make change");
    }

    #[test]
    fn change_rejects_empty_coin_set() {
        assert_eq!(
            find_fewest_coins(&[], 1).unwrap_err(),
            CoreError::NoCoinSmallEnough
        );
    }

    #[test]
    fn change_rejects_unreachable_amount() {
        let err = find_fewest_coins(&[5, 10], 94).unwrap_err();
        assert_eq!(err, CoreError::NoCombination);
        assert_eq!(err.to_string(), "No combination can add up to target");
    }

    #[test]
    fn change_rejects_non_positive_coin() {
        assert_eq!(
            find_fewest_coins(&[0, 1], 3).unwrap_err(),
            CoreError::InvalidDenomination(0)
        );
    }

    #[test]
    fn change_rejects_amount_beyond_table_capacity() {
        assert_eq!(
            find_fewest_coins(&[1], i64::MAX).unwrap_err(),
            CoreError::AmountTooLarge(i64::MAX)
        );
    }

    #[test]
    fn change_checks_sign_before_denominations() {
        assert_eq!(
            find_fewest_coins(&[0], -5).unwrap_err(),
            CoreError::NegativeAmount
        );
    }
}
