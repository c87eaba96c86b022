//! Greedy first-fit lane packing within one resource row.

use crewboard_core::TimeRange;

/// Lane assignment for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanePlacement {
    /// Lane the interval occupies, `0`-based from the row top.
    pub lane: usize,
    /// Set when the interval exceeded capacity and was forced into the
    /// last lane, where it may visually collide with its lane mates.
    pub overflowed: bool,
}

/// Result of packing one resource's day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLanes {
    /// One placement per input range, in input order.
    pub placements: Vec<LanePlacement>,
    /// Distinct lanes opened; never exceeds the capacity.
    pub lanes_used: usize,
    /// How many placements overflowed.
    pub overflow_count: usize,
}

impl PackedLanes {
    /// Packing of an empty day.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            placements: Vec::new(),
            lanes_used: 0,
            overflow_count: 0,
        }
    }
}

/// Pack time ranges into at most `capacity` parallel lanes.
///
/// First fit: lanes are scanned from the top and the range lands in the
/// first lane where it overlaps nothing already placed (every occupant is
/// checked, so the packer stays correct even for input that is not sorted).
/// A new lane opens only while fewer than `capacity` exist. Once the row is
/// full, further conflicting ranges are forced into the last lane and
/// marked overflowed rather than dropped: a visible collision beats a
/// missing appointment.
///
/// Ranges are expected in [`interval_order`](crate::interval_order) —
/// ascending start with longer spans first — which gives the densest
/// packing. A zero capacity behaves as one lane.
#[must_use]
pub fn pack_lanes(ranges: &[TimeRange], capacity: usize) -> PackedLanes {
    let capacity = capacity.max(1);
    let mut lanes: Vec<Vec<TimeRange>> = Vec::new();
    let mut placements = Vec::with_capacity(ranges.len());
    let mut overflow_count = 0;

    for range in ranges {
        let fit = lanes
            .iter()
            .position(|lane| !lane.iter().any(|occupied| occupied.overlaps(range)));
        let (lane, overflowed) = match fit {
            Some(lane) => (lane, false),
            None if lanes.len() < capacity => {
                lanes.push(Vec::new());
                (lanes.len() - 1, false)
            }
            None => {
                overflow_count += 1;
                (capacity - 1, true)
            }
        };
        lanes[lane].push(*range);
        placements.push(LanePlacement { lane, overflowed });
    }

    PackedLanes {
        placements,
        lanes_used: lanes.len(),
        overflow_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, hour, min, 0).unwrap()
    }

    fn span(start: (u32, u32), end: (u32, u32)) -> TimeRange {
        TimeRange::new(at(start.0, start.1), at(end.0, end.1))
    }

    fn lanes_of(packed: &PackedLanes) -> Vec<usize> {
        packed.placements.iter().map(|p| p.lane).collect()
    }

    // =========================================================================
    // First-fit placement
    // =========================================================================

    #[test]
    fn test_two_overlapping_ranges_take_two_lanes() {
        let packed = pack_lanes(&[span((9, 0), (10, 0)), span((9, 30), (10, 30))], 6);
        assert_eq!(lanes_of(&packed), [0, 1]);
        assert_eq!(packed.lanes_used, 2);
        assert_eq!(packed.overflow_count, 0);
    }

    #[test]
    fn test_sequential_ranges_share_lane_zero() {
        let packed = pack_lanes(
            &[
                span((8, 0), (9, 0)),
                span((9, 0), (10, 0)),
                span((10, 0), (11, 0)),
            ],
            6,
        );
        assert_eq!(lanes_of(&packed), [0, 0, 0]);
        assert_eq!(packed.lanes_used, 1);
    }

    #[test]
    fn test_gap_in_low_lane_is_reused() {
        // Lane 0 frees up at 10:00; the 10:15 range drops back into it.
        let packed = pack_lanes(
            &[
                span((8, 0), (10, 0)),
                span((9, 0), (12, 0)),
                span((10, 15), (11, 0)),
            ],
            6,
        );
        assert_eq!(lanes_of(&packed), [0, 1, 0]);
    }

    #[test]
    fn test_candidate_is_checked_against_every_occupant() {
        // Lane 0 holds 8-9 and 11-12. A 10:30-11:30 range clears the first
        // occupant but not the second, so it must move on to lane 1.
        let packed = pack_lanes(
            &[
                span((8, 0), (9, 0)),
                span((8, 30), (12, 0)),
                span((11, 0), (12, 0)),
                span((10, 30), (11, 30)),
            ],
            6,
        );
        // 8-9 -> lane 0; 8:30-12 -> lane 1; 11-12 -> lane 0; 10:30-11:30
        // overlaps both lane 0's 11-12 and lane 1's long range -> lane 2.
        assert_eq!(lanes_of(&packed), [0, 1, 0, 2]);
    }

    // =========================================================================
    // Capacity and overflow
    // =========================================================================

    #[test]
    fn test_seven_concurrent_ranges_overflow_into_last_lane() {
        let ranges: Vec<TimeRange> = (0..7).map(|_| span((9, 0), (10, 0))).collect();
        let packed = pack_lanes(&ranges, 6);
        assert_eq!(lanes_of(&packed), [0, 1, 2, 3, 4, 5, 5]);
        assert_eq!(packed.lanes_used, 6);
        assert_eq!(packed.overflow_count, 1);
        assert!(packed.placements[6].overflowed);
        assert!(packed.placements[..6].iter().all(|p| !p.overflowed));
    }

    #[test]
    fn test_overflow_lane_frees_up_for_later_ranges() {
        // Capacity 2: the third concurrent range overflows into lane 1,
        // but an afternoon range still fits lane 0 cleanly.
        let packed = pack_lanes(
            &[
                span((9, 0), (11, 0)),
                span((9, 0), (11, 0)),
                span((9, 30), (10, 30)),
                span((14, 0), (15, 0)),
            ],
            2,
        );
        assert_eq!(lanes_of(&packed), [0, 1, 1, 0]);
        assert_eq!(packed.overflow_count, 1);
        assert!(packed.placements[2].overflowed);
        assert!(!packed.placements[3].overflowed);
    }

    #[test]
    fn test_zero_capacity_behaves_as_one_lane() {
        let packed = pack_lanes(&[span((9, 0), (10, 0)), span((9, 0), (10, 0))], 0);
        assert_eq!(lanes_of(&packed), [0, 0]);
        assert_eq!(packed.lanes_used, 1);
        assert_eq!(packed.overflow_count, 1);
    }

    #[test]
    fn test_empty_input() {
        let packed = pack_lanes(&[], 6);
        assert_eq!(packed, PackedLanes::empty());
    }

    // =========================================================================
    // Property tests
    // =========================================================================

    use proptest::prelude::*;

    fn minute_ranges(max_len: usize) -> impl Strategy<Value = Vec<TimeRange>> {
        proptest::collection::vec((0i64..1380, 1i64..240), 0..max_len).prop_map(|pairs| {
            let day = at(0, 0);
            let mut ranges: Vec<TimeRange> = pairs
                .into_iter()
                .map(|(start, len)| {
                    TimeRange::new(
                        day + chrono::Duration::minutes(start),
                        day + chrono::Duration::minutes(start + len),
                    )
                })
                .collect();
            // Canonical packing order: start ascending, longer first.
            ranges.sort_by(|a, b| {
                a.start
                    .cmp(&b.start)
                    .then_with(|| b.duration().cmp(&a.duration()))
            });
            ranges
        })
    }

    proptest! {
        #[test]
        fn prop_every_range_gets_a_lane_below_capacity(
            ranges in minute_ranges(40),
            capacity in 1usize..8,
        ) {
            let packed = pack_lanes(&ranges, capacity);
            prop_assert_eq!(packed.placements.len(), ranges.len());
            prop_assert!(packed.lanes_used <= capacity);
            for p in &packed.placements {
                prop_assert!(p.lane < capacity);
            }
        }

        #[test]
        fn prop_non_overflowed_lane_mates_never_overlap(
            ranges in minute_ranges(40),
            capacity in 1usize..8,
        ) {
            let packed = pack_lanes(&ranges, capacity);
            for lane in 0..capacity {
                let members: Vec<&TimeRange> = ranges
                    .iter()
                    .zip(&packed.placements)
                    .filter(|(_, p)| p.lane == lane && !p.overflowed)
                    .map(|(r, _)| r)
                    .collect();
                for (i, a) in members.iter().enumerate() {
                    for b in &members[i + 1..] {
                        prop_assert!(!a.overlaps(b), "lane {lane}: {a:?} overlaps {b:?}");
                    }
                }
            }
        }

        #[test]
        fn prop_overflow_only_in_last_lane(
            ranges in minute_ranges(40),
            capacity in 1usize..8,
        ) {
            let packed = pack_lanes(&ranges, capacity);
            for p in &packed.placements {
                if p.overflowed {
                    prop_assert_eq!(p.lane, capacity - 1);
                }
            }
        }
    }
}
