//! Cache-safe tables of precomputed points.
use crate::{field::LIMBS, Curve, Error, FieldElement, Point};
use alloc::vec::Vec;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Limbs per table entry: `x` followed by `y`.
const ENTRY_LIMBS: usize = 2 * LIMBS;

/// A read-only table of normalized points, flattened into limbs.
///
/// Windowed and fixed-base scalar multiplication keep picking one of a few
/// precomputed points by a digit of the (secret) scalar. [`lookup`] does that
/// without the index affecting which memory is touched: every entry is read
/// on every call and all but the wanted one are masked away. [`lookup_var`]
/// reads the one entry directly and must only be used with public indices.
///
/// Built with [`Curve::create_lookup_table`].
///
/// [`lookup`]: LookupTable::lookup
/// [`lookup_var`]: LookupTable::lookup_var
#[derive(Clone)]
pub struct LookupTable<'c> {
    curve: &'c Curve,
    table: Vec<u64>,
    len: usize,
}

impl<'c> LookupTable<'c> {
    pub(crate) fn new(
        curve: &'c Curve,
        points: &[Point<'_>],
        offset: usize,
        len: usize,
    ) -> Result<Self, Error> {
        let end = offset.saturating_add(len);
        if end > points.len() {
            return Err(Error::IndexOutOfRange {
                index: offset.max(points.len()),
                len: points.len(),
            });
        }

        let mut table = Vec::with_capacity(len * ENTRY_LIMBS);
        for (i, point) in points[offset..end].iter().enumerate() {
            let position = offset + i;
            let (x, y) = match (point.raw_x(), point.raw_y()) {
                (Some(x), Some(y)) if point.is_normalized() => (x, y),
                _ => return Err(Error::NotNormalized { position }),
            };
            table.extend_from_slice(&x.to_limbs());
            table.extend_from_slice(&y.to_limbs());
        }

        Ok(Self { curve, table, len })
    }

    /// Number of points in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The curve the table's points belong to.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Fetches entry `index` in constant time.
    ///
    /// The memory accessed and the work done are the same for every `index`.
    /// `index` must be less than [`len`]. An out of range index is not
    /// reported (that check would branch on the secret) and gives a point
    /// whose `x` and `λ` are both zero.
    ///
    /// [`len`]: LookupTable::len
    pub fn lookup(&self, index: usize) -> Point<'c> {
        let (x, y, _) = self.select(index);
        self.create_point(x, y)
    }

    /// Fetches entry `index` directly.
    ///
    /// This takes time and touches memory depending on `index` so it must
    /// only be used when `index` is public. Errors with
    /// [`Error::IndexOutOfRange`] if `index` is not less than [`len`].
    ///
    /// [`len`]: LookupTable::len
    pub fn lookup_var(&self, index: usize) -> Result<Point<'c>, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let pos = index * ENTRY_LIMBS;
        let mut x = [0u64; LIMBS];
        let mut y = [0u64; LIMBS];
        x.copy_from_slice(&self.table[pos..pos + LIMBS]);
        y.copy_from_slice(&self.table[pos + LIMBS..pos + ENTRY_LIMBS]);
        Ok(self.create_point(x, y))
    }

    /// Accumulates every entry under its mask. Also returns how many entries
    /// were folded in, which is always `self.len`.
    fn select(&self, index: usize) -> ([u64; LIMBS], [u64; LIMBS], usize) {
        let mut x = [0u64; LIMBS];
        let mut y = [0u64; LIMBS];
        let mut steps = 0;

        for (i, entry) in self.table.chunks_exact(ENTRY_LIMBS).enumerate() {
            let mask = select_mask(i, index);
            for j in 0..LIMBS {
                x[j] ^= entry[j] & mask;
                y[j] ^= entry[LIMBS + j] & mask;
            }
            steps += 1;
        }

        (x, y, steps)
    }

    fn create_point(&self, x: [u64; LIMBS], y: [u64; LIMBS]) -> Point<'c> {
        Point::from_parts(
            self.curve,
            Some(FieldElement::from_limbs_unchecked(x)),
            Some(FieldElement::from_limbs_unchecked(y)),
            [FieldElement::ONE],
            false,
        )
    }
}

impl core::fmt::Debug for LookupTable<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("LookupTable").field("len", &self.len).finish()
    }
}

/// All ones if `i == index`, all zeros otherwise.
///
/// The comparison goes through [`ConstantTimeEq`] and the mask is picked with
/// [`ConditionallySelectable`] so the result never depends on a branch.
#[inline(always)]
pub(crate) fn select_mask(i: usize, index: usize) -> u64 {
    let is_index = (i as u64).ct_eq(&(index as u64));
    u64::conditional_select(&0, &u64::MAX, is_index)
}

#[cfg(test)]
mod test {
    use super::*;
    #[cfg(feature = "proptest")]
    use proptest::prelude::*;

    fn fe(value: u128) -> FieldElement {
        FieldElement::from_u128(value).unwrap()
    }

    fn points(curve: &Curve, n: u128) -> Vec<Point<'_>> {
        (0..n)
            .map(|i| curve.create_point(fe(i * 3 + 1), fe((i + 7) << 90 | i), false))
            .collect()
    }

    #[test]
    fn mask_edge_values() {
        let n = 16;
        assert_eq!(select_mask(0, 0), u64::MAX);
        assert_eq!(select_mask(n - 1, n - 1), u64::MAX);
        assert_eq!(select_mask(0, n - 1), 0);
        assert_eq!(select_mask(n - 1, 0), 0);
        for i in 0..n - 1 {
            assert_eq!(select_mask(i, i + 1), 0);
            assert_eq!(select_mask(i + 1, i), 0);
            assert_eq!(select_mask(i, i), u64::MAX);
        }
        assert_eq!(select_mask(usize::MAX, usize::MAX), u64::MAX);
        assert_eq!(select_mask(0, usize::MAX), 0);
        assert_eq!(select_mask(1, 1 | 1 << 31), 0);
        assert_eq!(select_mask(0, 1 << (usize::BITS - 1)), 0);
    }

    #[test]
    fn masked_select_matches_conditional_assign() {
        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 7);
        let table = curve.create_lookup_table(&points, 0, points.len()).unwrap();
        for index in [0, 3, 6, 7, 1 << (usize::BITS - 1)] {
            let mut x = FieldElement::ZERO;
            let mut y = FieldElement::ZERO;
            for (i, point) in points.iter().enumerate() {
                let hit = (i as u64).ct_eq(&(index as u64));
                x.conditional_assign(point.raw_x().unwrap(), hit);
                y.conditional_assign(point.raw_y().unwrap(), hit);
            }
            let (sel_x, sel_y, steps) = table.select(index);
            assert_eq!(sel_x, x.to_limbs(), "index {}", index);
            assert_eq!(sel_y, y.to_limbs(), "index {}", index);
            assert_eq!(steps, points.len());
        }
    }

    #[test]
    fn lookup_touches_every_entry() {
        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 9);
        let table = curve.create_lookup_table(&points, 0, points.len()).unwrap();
        for index in [0, 1, 4, 8, 9, 100, usize::MAX] {
            let (_, _, steps) = table.select(index);
            assert_eq!(steps, 9, "index {}", index);
        }
    }

    #[test]
    fn table_is_a_faithful_copy() {
        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 10);
        let table = curve.create_lookup_table(&points, 3, 5).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.table.len(), 5 * 2 * LIMBS);
        for (i, entry) in table.table.chunks_exact(ENTRY_LIMBS).enumerate() {
            let point = &points[3 + i];
            assert_eq!(&entry[..LIMBS], &point.raw_x().unwrap().to_limbs()[..]);
            assert_eq!(&entry[LIMBS..], &point.raw_y().unwrap().to_limbs()[..]);
        }
    }

    #[test]
    fn out_of_range_constant_time_lookup_is_zero() {
        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 4);
        let table = curve.create_lookup_table(&points, 0, 4).unwrap();
        let zero = curve.create_point(FieldElement::ZERO, FieldElement::ZERO, false);
        assert_eq!(table.lookup(4), zero);
        assert_eq!(table.lookup(usize::MAX), zero);
    }

    #[test]
    fn out_of_range_variable_time_lookup_fails() {
        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 4);
        let table = curve.create_lookup_table(&points, 0, 4).unwrap();
        assert_eq!(
            table.lookup_var(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            table.lookup_var(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 4
            })
        );
    }

    #[test]
    fn empty_table() {
        let curve = Curve::sect113r2().unwrap();
        let table = curve.create_lookup_table(&[], 0, 0).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.select(0).2, 0);
        assert!(table.lookup_var(0).is_err());
    }

    #[test]
    fn build_range_errors() {
        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 4);
        assert_eq!(
            curve.create_lookup_table(&points, 2, 3).unwrap_err(),
            Error::IndexOutOfRange { index: 4, len: 4 }
        );
        assert_eq!(
            curve.create_lookup_table(&points, 6, 0).unwrap_err(),
            Error::IndexOutOfRange { index: 6, len: 4 }
        );
        assert_eq!(
            curve
                .create_lookup_table(&points, usize::MAX, 2)
                .unwrap_err(),
            Error::IndexOutOfRange {
                index: usize::MAX,
                len: 4
            }
        );
        assert!(curve.create_lookup_table(&points, 4, 0).unwrap().is_empty());
    }

    #[test]
    fn build_rejects_non_normalized_points() {
        let curve = Curve::sect113r2().unwrap();
        let mut points = points(&curve, 4);
        points[2] = curve.infinity();
        assert_eq!(
            curve.create_lookup_table(&points, 0, 4).unwrap_err(),
            Error::NotNormalized { position: 2 }
        );
        // the bad point is outside the copied range
        assert!(curve.create_lookup_table(&points, 0, 2).is_ok());

        points[2] = curve
            .create_raw_point(fe(5), fe(6), &[fe(2)], false)
            .unwrap();
        assert_eq!(
            curve.create_lookup_table(&points, 1, 3).unwrap_err(),
            Error::NotNormalized { position: 2 }
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn concurrent_readers() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LookupTable<'static>>();
        assert_send_sync::<Point<'static>>();
        assert_send_sync::<Curve>();

        let curve = Curve::sect113r2().unwrap();
        let points = points(&curve, 8);
        let table = curve.create_lookup_table(&points, 0, 8).unwrap();
        std::thread::scope(|s| {
            for t in 0..4 {
                let table = &table;
                let points = &points;
                s.spawn(move || {
                    for i in 0..8 {
                        let index = (i + t) % 8;
                        assert_eq!(table.lookup(index), points[index]);
                    }
                });
            }
        });
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn constant_and_variable_time_agree(
            coords in crate::proptest::coordinates(24),
            pick in any::<prop::sample::Index>(),
        ) {
            let curve = Curve::sect113r2().unwrap();
            let points = coords
                .iter()
                .map(|&(x, y)| curve.create_point(x, y, false))
                .collect::<Vec<_>>();
            let table = curve.create_lookup_table(&points, 0, points.len()).unwrap();
            let index = pick.index(points.len());
            let ct = table.lookup(index);
            prop_assert_eq!(ct, table.lookup_var(index).unwrap());
            prop_assert_eq!(ct, points[index]);
            prop_assert_eq!(table.select(index).2, points.len());
        }

        #[test]
        fn constant_time_lookup_of_a_single_entry(x in any::<FieldElement>(), y in any::<FieldElement>()) {
            let curve = Curve::sect113r2().unwrap();
            let point = curve.create_point(x, y, false);
            let table = curve.create_lookup_table(&[point], 0, 1).unwrap();
            prop_assert_eq!(table.lookup(0), point);
            prop_assert_eq!(table.lookup_var(0).unwrap(), point);
        }
    }
}
