//! Hand evaluation: every 5-card subset of a 5-7 card set is classified and
//! the best one kept. The enumeration is exhaustive on purpose (at most
//! C(7,5) = 21 subsets); there is no lookup-table shortcut to go wrong.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Poker hand category, ordered weakest to strongest.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };
        f.write_str(name)
    }
}

/// Comparable strength of one 5-card hand: category first, then the
/// category-specific tiebreak ranks high to low. Field order makes the
/// derived `Ord` the total order the rules require.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct HandValue {
    pub category: Category,
    /// Tiebreak ranks, ordered for lexicographic comparison; unused slots
    /// are zero (e.g. a straight only needs its top card).
    pub tiebreak: [u8; 5],
}

/// Classify exactly five cards.
pub fn rank_five(cards: &[Card; 5]) -> HandValue {
    let mut ranks: [u8; 5] = [
        cards[0].rank as u8,
        cards[1].rank as u8,
        cards[2].rank as u8,
        cards[3].rank as u8,
        cards[4].rank as u8,
    ];
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = straight_top(&ranks);

    if flush {
        if let Some(high) = straight_high {
            return HandValue {
                category: Category::StraightFlush,
                tiebreak: [high, 0, 0, 0, 0],
            };
        }
    }

    // Group ranks by multiplicity: (count, rank) sorted count-major,
    // rank-minor, both descending. The grouping shape decides the category.
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in &ranks {
        match groups.iter_mut().find(|(_, gr)| *gr == r) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let counts: Vec<u8> = groups.iter().map(|(c, _)| *c).collect();
    match counts.as_slice() {
        [4, 1] => HandValue {
            category: Category::FourOfAKind,
            tiebreak: [groups[0].1, groups[1].1, 0, 0, 0],
        },
        [3, 2] => HandValue {
            category: Category::FullHouse,
            tiebreak: [groups[0].1, groups[1].1, 0, 0, 0],
        },
        _ if flush => HandValue {
            category: Category::Flush,
            tiebreak: ranks,
        },
        _ if straight_high.is_some() => HandValue {
            category: Category::Straight,
            tiebreak: [straight_high.unwrap_or(0), 0, 0, 0, 0],
        },
        [3, 1, 1] => HandValue {
            category: Category::ThreeOfAKind,
            tiebreak: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        },
        [2, 2, 1] => HandValue {
            category: Category::TwoPair,
            tiebreak: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        },
        [2, 1, 1, 1] => HandValue {
            category: Category::OnePair,
            tiebreak: [groups[0].1, groups[1].1, groups[2].1, groups[3].1, 0],
        },
        _ => HandValue {
            category: Category::HighCard,
            tiebreak: ranks,
        },
    }
}

/// Best hand achievable with any five of the given 5-7 cards
/// (2 hole cards + 3-5 community cards in normal play).
///
/// Deterministic for a fixed input set. Inputs shorter than five cards make
/// no 5-card hand; the caller gets the rank of whatever full subset exists,
/// so this debug-asserts the contract instead of panicking in release.
pub fn best_hand(cards: &[Card]) -> HandValue {
    let n = cards.len();
    debug_assert!((5..=7).contains(&n), "evaluator takes 5-7 cards, got {}", n);

    let first: [Card; 5] = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let mut best = rank_five(&first);
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let v = rank_five(&five);
                        if v > best {
                            best = v;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Top card of a straight formed by five distinct consecutive ranks, given
/// ranks sorted descending. The wheel (A-2-3-4-5) scores 5-high, not
/// Ace-high.
fn straight_top(ranks_desc: &[u8; 5]) -> Option<u8> {
    let distinct = ranks_desc.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if ranks_desc.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(ranks_desc[0]);
    }
    if *ranks_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}
