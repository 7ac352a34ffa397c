//! Payoff matrix totality and conservation tests.

use proptest::prelude::*;
use split_or_steal::{payoff, Choice, Outcome};

/// Every combination on a fixed pot, spelled out.
#[test]
fn test_full_matrix() {
    let cases = [
        (Choice::Split, Choice::Split, 10, 10, Outcome::BothSplit),
        (Choice::Steal, Choice::Split, 20, 0, Outcome::ASteals),
        (Choice::Split, Choice::Steal, 0, 20, Outcome::BSteals),
        (Choice::Steal, Choice::Steal, 0, 0, Outcome::BothSteal),
    ];

    for (a, b, expect_a, expect_b, expect_outcome) in cases {
        assert_eq!(payoff(20, a, b), (expect_a, expect_b, expect_outcome));
    }
}

fn choice() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Split), Just(Choice::Steal)]
}

proptest! {
    /// The matrix never creates or destroys value: payouts sum to the pot
    /// unless both steal, in which case they sum to zero.
    #[test]
    fn conservation(buy_in in 1u64..1_000_000_000u64, a in choice(), b in choice()) {
        let pot = buy_in * 2;
        let (payout_a, payout_b, outcome) = payoff(pot, a, b);

        match outcome {
            Outcome::BothSteal => prop_assert_eq!(payout_a + payout_b, 0),
            _ => prop_assert_eq!(payout_a + payout_b, pot),
        }
    }

    /// An even split is exact: the pot is always twice the buy-in.
    #[test]
    fn split_is_exact(buy_in in 1u64..1_000_000_000u64) {
        let pot = buy_in * 2;
        let (payout_a, payout_b, _) = payoff(pot, Choice::Split, Choice::Split);

        prop_assert_eq!(payout_a, buy_in);
        prop_assert_eq!(payout_b, buy_in);
    }

    /// Exactly one stealer takes everything, and only the stealer is paid.
    #[test]
    fn lone_stealer_takes_all(buy_in in 1u64..1_000_000_000u64) {
        let pot = buy_in * 2;

        let (a_take, b_zero, _) = payoff(pot, Choice::Steal, Choice::Split);
        prop_assert_eq!((a_take, b_zero), (pot, 0));

        let (a_zero, b_take, _) = payoff(pot, Choice::Split, Choice::Steal);
        prop_assert_eq!((a_zero, b_take), (0, pot));
    }
}
