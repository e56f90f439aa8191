use crate::{
    hex::{self, HexError},
    point::Point,
    CoordinateSystem, Error, FieldElement,
};

#[cfg(feature = "alloc")]
use crate::LookupTable;

/// The constants a binary curve is built from, as they appear in the
/// standards documents.
///
/// `a`, `b` and `order` are big-endian hex strings of exactly 15 bytes.
/// `cofactor` is a big-endian hex string of 1 to 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSpec {
    /// Degree `m` of the binary field.
    pub field_degree: u32,
    /// Exponents `(k1, k2, k3)` of the reduction polynomial below `m`.
    /// `k2 = k3 = 0` means the trinomial `z^m + z^k1 + 1`.
    pub reduction_exponents: (u32, u32, u32),
    /// Curve coefficient `a`.
    pub a: &'static str,
    /// Curve coefficient `b`.
    pub b: &'static str,
    /// Order of the prime-order subgroup.
    pub order: &'static str,
    /// Ratio of the number of curve points to `order`.
    pub cofactor: &'static str,
    /// Whether this is a Koblitz (anomalous binary) curve.
    pub koblitz: bool,
}

/// sect113r2 from [_SEC 2: Recommended Elliptic Curve Domain Parameters_ (v1)].
///
/// `y² + xy = x³ + ax² + b` over GF(2^113) with reduction polynomial
/// `z^113 + z^9 + 1`.
///
/// [_SEC 2: Recommended Elliptic Curve Domain Parameters_ (v1)]: https://www.secg.org/SEC2-Ver-1.0.pdf
pub const SECT113R2: CurveSpec = CurveSpec {
    field_degree: 113,
    reduction_exponents: (9, 0, 0),
    a: "00689918DBEC7E5A0DD6DFC0AA55C7",
    b: "0095E9A9EC9B297BD4BF36E059184F",
    order: "010000000000000108789B2496AF93",
    cofactor: "02",
    koblitz: false,
};

/// An elliptic curve over GF(2^113).
///
/// A `Curve` is an immutable value. Every parameter is decoded and checked in
/// [`Curve::new`] and never changes afterwards so a curve can be shared
/// between threads by reference. [`Point`]s and [`LookupTable`]s borrow the
/// curve they belong to.
///
/// # Examples
///
/// ```
/// use sect113fun::{CoordinateSystem, Curve, FieldElement};
/// let curve = Curve::sect113r2()?;
/// assert_eq!(curve.m(), 113);
/// assert!(curve.is_trinomial());
/// assert_eq!(curve.cofactor(), 2);
/// assert!(curve.supports_coordinate_system(CoordinateSystem::LambdaProjective));
///
/// let x = curve.from_field_element(42).unwrap();
/// let point = curve.create_point(x, FieldElement::ONE, false);
/// assert_eq!(point.raw_x(), Some(&x));
/// # Ok::<(), sect113fun::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    m: u32,
    k1: u32,
    k2: u32,
    k3: u32,
    a: FieldElement,
    b: FieldElement,
    order: u128,
    cofactor: u128,
    koblitz: bool,
    coordinate_system: CoordinateSystem,
}

/// Width of the field in bits. Points are always over GF(2^113).
const FIELD_BITS: u32 = crate::field::FIELD_DEGREE;

impl Curve {
    /// Builds a curve from its encoded constants.
    ///
    /// Fails with [`Error::MalformedParameter`] if any constant has a bad hex
    /// digit or the wrong width, if `a` or `b` do not fit in the field, or if
    /// the field degree or reduction exponents do not describe GF(2^113).
    pub fn new(spec: &CurveSpec) -> Result<Self, Error> {
        if spec.field_degree != FIELD_BITS {
            return Err(malformed("field_degree", HexError::InvalidLength));
        }
        let (k1, k2, k3) = spec.reduction_exponents;
        let trinomial = k2 == 0 && k3 == 0 && 0 < k1 && k1 < FIELD_BITS;
        let pentanomial = 0 < k1 && k1 < k2 && k2 < k3 && k3 < FIELD_BITS;
        if !(trinomial || pentanomial) {
            return Err(malformed("reduction_exponents", HexError::InvalidEncoding));
        }

        let a = decode_field_element("a", spec.a)?;
        let b = decode_field_element("b", spec.b)?;
        let order = hex::decode_array::<15>(spec.order)
            .map(|bytes| {
                let mut buf = [0u8; 16];
                buf[1..].copy_from_slice(&bytes);
                u128::from_be_bytes(buf)
            })
            .map_err(|reason| malformed("order", reason))?;
        let cofactor = hex::decode_u128(spec.cofactor).map_err(|reason| malformed("cofactor", reason))?;
        if order == 0 {
            return Err(malformed("order", HexError::InvalidEncoding));
        }
        if cofactor == 0 {
            return Err(malformed("cofactor", HexError::InvalidEncoding));
        }

        Ok(Self {
            m: spec.field_degree,
            k1,
            k2,
            k3,
            a,
            b,
            order,
            cofactor,
            koblitz: spec.koblitz,
            coordinate_system: CoordinateSystem::LambdaProjective,
        })
    }

    /// Builds [sect113r2](SECT113R2).
    pub fn sect113r2() -> Result<Self, Error> {
        Self::new(&SECT113R2)
    }

    /// Whether points on this curve can be represented in `system`.
    ///
    /// Only [`CoordinateSystem::LambdaProjective`] is supported.
    pub fn supports_coordinate_system(&self, system: CoordinateSystem) -> bool {
        matches!(system, CoordinateSystem::LambdaProjective)
    }

    /// Returns a copy of this curve that uses `system` for its points.
    ///
    /// Errors with [`Error::UnsupportedCoordinateSystem`] if the system is not
    /// supported. `self` is left as it was either way.
    pub fn configure(&self, system: CoordinateSystem) -> Result<Self, Error> {
        if !self.supports_coordinate_system(system) {
            return Err(Error::UnsupportedCoordinateSystem(system));
        }
        Ok(Self {
            coordinate_system: system,
            ..self.clone()
        })
    }

    /// Wraps a bit-packed value as a field element of this curve.
    ///
    /// Returns `None` if `value` does not fit in 113 bits.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_field_element(&self, value: u128) -> Option<FieldElement> {
        FieldElement::from_u128(value)
    }

    /// Creates a point from raw `x` and `λ` with the initial z-coordinates of
    /// the curve's coordinate system (i.e. already normalized).
    ///
    /// The point is not checked to be on the curve.
    pub fn create_point(&self, x: FieldElement, y: FieldElement, compressed: bool) -> Point<'_> {
        Point::from_parts(self, Some(x), Some(y), [FieldElement::ONE], compressed)
    }

    /// Creates a point from raw coordinates including its z-coordinates.
    ///
    /// `zs` must have exactly as many elements as the curve's coordinate
    /// system uses, otherwise [`Error::InvalidZCoordinates`]. The point is not
    /// checked to be on the curve.
    pub fn create_raw_point(
        &self,
        x: FieldElement,
        y: FieldElement,
        zs: &[FieldElement],
        compressed: bool,
    ) -> Result<Point<'_>, Error> {
        let expected = self.coordinate_system.z_count();
        let zs: [FieldElement; 1] = zs.try_into().map_err(|_| Error::InvalidZCoordinates {
            expected,
            got: zs.len(),
        })?;
        Ok(Point::from_parts(self, Some(x), Some(y), zs, compressed))
    }

    /// Like [`create_raw_point`] but for coordinates given in `system`.
    ///
    /// Errors with [`Error::UnsupportedCoordinateSystem`] unless the curve
    /// supports `system`.
    ///
    /// [`create_raw_point`]: Self::create_raw_point
    pub fn create_point_in(
        &self,
        system: CoordinateSystem,
        x: FieldElement,
        y: FieldElement,
        zs: &[FieldElement],
        compressed: bool,
    ) -> Result<Point<'_>, Error> {
        if !self.supports_coordinate_system(system) {
            return Err(Error::UnsupportedCoordinateSystem(system));
        }
        self.create_raw_point(x, y, zs, compressed)
    }

    /// The point at infinity of this curve.
    ///
    /// A fresh `Copy` value is built on each call. Every call returns an
    /// identical, normalized point; nothing is shared between them.
    pub fn infinity(&self) -> Point<'_> {
        Point::from_parts(self, None, None, [FieldElement::ONE], false)
    }

    /// Copies `points[offset..offset + len]` into a cache-safe lookup table.
    ///
    /// Every point must be finite and normalized (z = 1). See
    /// [`LookupTable`] for how entries are read back.
    ///
    /// # Examples
    ///
    /// ```
    /// use sect113fun::{Curve, FieldElement};
    /// let curve = Curve::sect113r2()?;
    /// let points = (1..=4u128)
    ///     .map(|i| {
    ///         let x = curve.from_field_element(i).unwrap();
    ///         let y = curve.from_field_element(i << 100).unwrap();
    ///         curve.create_point(x, y, false)
    ///     })
    ///     .collect::<Vec<_>>();
    /// let table = curve.create_lookup_table(&points, 0, points.len())?;
    /// assert_eq!(table.lookup(2), points[2]);
    /// assert_eq!(table.lookup_var(2)?, points[2]);
    /// # Ok::<(), sect113fun::Error>(())
    /// ```
    #[cfg(feature = "alloc")]
    pub fn create_lookup_table(
        &self,
        points: &[Point<'_>],
        offset: usize,
        len: usize,
    ) -> Result<LookupTable<'_>, Error> {
        LookupTable::new(self, points, offset, len)
    }

    /// Bit length of the field (`m`).
    pub fn field_size(&self) -> u32 {
        self.m
    }

    /// Degree of the binary field.
    pub fn m(&self) -> u32 {
        self.m
    }

    /// First reduction exponent.
    pub fn k1(&self) -> u32 {
        self.k1
    }

    /// Second reduction exponent (0 for trinomials).
    pub fn k2(&self) -> u32 {
        self.k2
    }

    /// Third reduction exponent (0 for trinomials).
    pub fn k3(&self) -> u32 {
        self.k3
    }

    /// Whether the reduction polynomial is a trinomial.
    pub fn is_trinomial(&self) -> bool {
        self.k2 == 0 && self.k3 == 0
    }

    /// Whether this is a Koblitz curve.
    pub fn is_koblitz(&self) -> bool {
        self.koblitz
    }

    /// Curve coefficient `a`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Curve coefficient `b`.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Order of the prime-order subgroup.
    pub fn order(&self) -> u128 {
        self.order
    }

    /// The cofactor.
    pub fn cofactor(&self) -> u128 {
        self.cofactor
    }

    /// The coordinate system points of this curve are created in.
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.coordinate_system
    }
}

fn malformed(name: &'static str, reason: HexError) -> Error {
    Error::MalformedParameter { name, reason }
}

fn decode_field_element(name: &'static str, hex: &str) -> Result<FieldElement, Error> {
    let bytes = hex::decode_array::<15>(hex).map_err(|reason| malformed(name, reason))?;
    FieldElement::from_bytes(bytes).ok_or(malformed(name, HexError::InvalidEncoding))
}
