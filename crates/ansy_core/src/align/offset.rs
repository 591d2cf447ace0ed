//! Grid-snapped offset arithmetic.

/// Sampling-grid width of the supported recorders, in milliseconds.
pub const DEFAULT_GRID_MS: i64 = 10;

/// A resolved alignment offset together with the quantities it was
/// derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOffset {
    /// Gap between the recordings' first raw timestamps (other - base).
    pub origin_ms: i64,
    /// Gap between the operator marks (other - base).
    pub manual_ms: i64,
    /// Sampling-grid width the offset was snapped to.
    pub grid_ms: i64,
    /// Final shift applied to the secondary recording.
    pub offset_ms: i64,
}

/// Snap the manual offset onto the residue class the two recordings' raw
/// sampling grids already agree on.
///
/// Shifting by the manual offset alone would move the secondary
/// recording's samples off the cadence it shares with the base. The
/// correction keeps the manual offset's whole grid buckets while
/// restoring the origin offset's residue, so
/// `offset_ms mod grid == origin_ms mod grid` holds for every input.
/// Euclidean remainders keep the arithmetic well-defined for negative
/// offsets.
pub fn resolve_offset(origin_ms: i64, manual_ms: i64, grid_ms: i64) -> ResolvedOffset {
    debug_assert!(grid_ms > 0, "sampling grid width must be positive");

    let correction = manual_ms.rem_euclid(grid_ms) - origin_ms.rem_euclid(grid_ms);
    ResolvedOffset {
        origin_ms,
        manual_ms,
        grid_ms,
        offset_ms: manual_ms - correction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_offset_already_on_grid_passes_through() {
        // origin 500 (residue 0), manual 530 (residue 0) -> 530 unchanged.
        let resolved = resolve_offset(500, 530, DEFAULT_GRID_MS);
        assert_eq!(resolved.offset_ms, 530);
    }

    #[test]
    fn off_grid_manual_offset_is_snapped() {
        // origin 500 (residue 0), manual 533 (residue 3) -> 530.
        let resolved = resolve_offset(500, 533, DEFAULT_GRID_MS);
        assert_eq!(resolved.offset_ms, 530);
    }

    #[test]
    fn origin_residue_is_restored() {
        // origin residue 9, manual residue 3: the offset keeps the manual
        // offset's bucket but lands on the origin's residue.
        let resolved = resolve_offset(9, 3, DEFAULT_GRID_MS);
        assert_eq!(resolved.offset_ms, 9);
        assert_eq!(resolved.offset_ms.rem_euclid(10), 9);
    }

    #[test]
    fn negative_offsets_use_euclidean_residues() {
        // -7 mod 10 must be 3, not -7.
        let resolved = resolve_offset(-7, 0, DEFAULT_GRID_MS);
        assert_eq!(resolved.offset_ms.rem_euclid(10), 3);

        let resolved = resolve_offset(500, -533, DEFAULT_GRID_MS);
        assert_eq!(resolved.offset_ms.rem_euclid(10), 0);
        assert_eq!(resolved.offset_ms, -540);
    }

    #[test]
    fn residue_class_matches_origin_for_all_inputs() {
        for origin in -45..45 {
            for manual in -45..45 {
                let resolved = resolve_offset(origin, manual, DEFAULT_GRID_MS);
                assert_eq!(
                    resolved.offset_ms.rem_euclid(DEFAULT_GRID_MS),
                    origin.rem_euclid(DEFAULT_GRID_MS),
                    "origin {} manual {}",
                    origin,
                    manual
                );
                // The snap never moves the offset by a full grid step.
                assert!((resolved.offset_ms - manual).abs() < DEFAULT_GRID_MS);
            }
        }
    }
}
