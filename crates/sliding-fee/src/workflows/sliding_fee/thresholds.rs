use serde::{Deserialize, Serialize};

use super::domain::EvaluationError;

/// Annual income ceilings at 100/125/150/175/200% FPL for households of one through eight.
const THRESHOLD_TABLE: [[u64; 5]; 8] = [
    [15060, 18825, 22590, 26355, 30120],
    [20440, 25550, 30660, 35770, 40880],
    [25820, 32275, 38730, 45185, 51640],
    [31200, 39000, 46800, 54600, 62400],
    [36580, 45725, 54870, 64015, 73160],
    [41960, 52450, 62940, 73430, 83920],
    [47340, 59175, 71010, 82845, 94680],
    [52720, 65900, 79080, 92260, 105440],
];

pub const TABULATED_FAMILY_SIZES: u32 = THRESHOLD_TABLE.len() as u32;

/// Added to every eight-person ceiling for each member beyond eight.
pub const EXTRA_MEMBER_INCREMENT: u64 = 5380;

pub const FPL_PERCENTAGES: [u16; 5] = [100, 125, 150, 175, 200];

/// Resolved ceilings for one household size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSchedule {
    pub family_size: u32,
    pub limits: [u64; 5],
    pub extrapolated: bool,
}

impl ThresholdSchedule {
    /// Pair each ceiling with the FPL percentage it represents.
    pub fn tiers(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        FPL_PERCENTAGES.iter().copied().zip(self.limits.iter().copied())
    }
}

/// Look up the ceilings for `family_size`, extrapolating above eight members.
pub fn thresholds_for(family_size: u32) -> Result<ThresholdSchedule, EvaluationError> {
    if family_size == 0 {
        return Err(EvaluationError::InvalidFamilySize(0));
    }

    if family_size <= TABULATED_FAMILY_SIZES {
        return Ok(ThresholdSchedule {
            family_size,
            limits: THRESHOLD_TABLE[(family_size - 1) as usize],
            extrapolated: false,
        });
    }

    let extra = u64::from(family_size - TABULATED_FAMILY_SIZES) * EXTRA_MEMBER_INCREMENT;
    let mut limits = THRESHOLD_TABLE[THRESHOLD_TABLE.len() - 1];
    for limit in limits.iter_mut() {
        *limit += extra;
    }

    Ok(ThresholdSchedule {
        family_size,
        limits,
        extrapolated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulated_rows_strictly_increase() {
        for row in THRESHOLD_TABLE {
            assert!(row.windows(2).all(|pair| pair[0] < pair[1]), "{row:?}");
        }
    }

    #[test]
    fn direct_lookup_for_tabulated_sizes() {
        let schedule = thresholds_for(4).expect("size 4 tabulated");
        assert_eq!(schedule.limits, [31200, 39000, 46800, 54600, 62400]);
        assert!(!schedule.extrapolated);

        let schedule = thresholds_for(1).expect("size 1 tabulated");
        assert_eq!(schedule.limits[4], 30120);
    }

    #[test]
    fn sizes_above_eight_add_increment_per_member() {
        let eight = thresholds_for(8).expect("size 8 tabulated");
        let nine = thresholds_for(9).expect("size 9 extrapolated");
        let twelve = thresholds_for(12).expect("size 12 extrapolated");

        assert!(nine.extrapolated);
        assert_eq!(nine.limits, [58100, 71280, 84460, 97640, 110820]);
        for (base, extended) in eight.limits.iter().zip(twelve.limits.iter()) {
            assert_eq!(*extended, base + 4 * EXTRA_MEMBER_INCREMENT);
        }
    }

    #[test]
    fn extrapolation_has_no_upper_cap() {
        let schedule = thresholds_for(u32::MAX).expect("any positive size resolves");
        assert!(schedule.limits.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn zero_family_size_is_rejected() {
        assert_eq!(thresholds_for(0), Err(EvaluationError::InvalidFamilySize(0)));
    }

    #[test]
    fn tiers_pair_percentages_with_limits() {
        let schedule = thresholds_for(2).expect("size 2 tabulated");
        let tiers: Vec<_> = schedule.tiers().collect();
        assert_eq!(tiers.first(), Some(&(100, 20440)));
        assert_eq!(tiers.last(), Some(&(200, 40880)));
    }
}
