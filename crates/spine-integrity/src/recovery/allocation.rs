use serde::{Deserialize, Serialize};

use spine_core::models::TruthStatus;

use super::target::TargetDistribution;

/// Corrective records assigned to one (source, destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub source: TruthStatus,
    pub target: TruthStatus,
    pub count: usize,
}

/// Split `n` records across the target's pairs proportionally to their
/// weights, using largest-remainder rounding so the counts sum to exactly `n`.
///
/// Remainder ties go to the earlier pair in (source, destination) order.
/// Pairs that receive zero records are omitted.
pub fn allocate(target: &TargetDistribution, n: usize) -> Vec<Allocation> {
    let total = target.total();
    let mut slots: Vec<(Allocation, f64)> = target
        .weighted_pairs()
        .map(|(source, dest, w)| {
            let quota = n as f64 * w / total;
            let floor = quota.floor();
            (
                Allocation {
                    source,
                    target: dest,
                    count: floor as usize,
                },
                quota - floor,
            )
        })
        .collect();

    let assigned: usize = slots.iter().map(|(a, _)| a.count).sum();
    let mut remaining = n.saturating_sub(assigned);
    if remaining > 0 {
        let mut order: Vec<usize> = (0..slots.len()).collect();
        // Stable sort keeps index order among equal remainders.
        order.sort_by(|&a, &b| slots[b].1.total_cmp(&slots[a].1));
        for &i in order.iter().cycle() {
            if remaining == 0 {
                break;
            }
            slots[i].0.count += 1;
            remaining -= 1;
        }
    }

    slots
        .into_iter()
        .map(|(a, _)| a)
        .filter(|a| a.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TruthStatus::*;

    #[test]
    fn counts_sum_to_n() {
        let t = TargetDistribution::from_pairs([
            (Pending, Verified, 1.0),
            (Verified, Canonical, 1.0),
            (Canonical, Pending, 1.0),
        ])
        .unwrap();
        let alloc = allocate(&t, 10);
        assert_eq!(alloc.iter().map(|a| a.count).sum::<usize>(), 10);
        // 10/3 each; the single leftover goes to the first pair.
        assert_eq!(alloc[0].count, 4);
        assert_eq!(alloc[1].count, 3);
        assert_eq!(alloc[2].count, 3);
    }

    #[test]
    fn largest_remainder_wins() {
        let t = TargetDistribution::from_pairs([(Pending, Verified, 0.7), (Verified, Pending, 0.3)])
            .unwrap();
        let alloc = allocate(&t, 3);
        // Quotas 2.1 and 0.9.
        assert_eq!(alloc[0].count, 2);
        assert_eq!(alloc[1].count, 1);
    }

    #[test]
    fn zero_records_allocate_nothing() {
        let t = TargetDistribution::from_pairs([(Pending, Verified, 1.0)]).unwrap();
        assert!(allocate(&t, 0).is_empty());
    }
}
