//! Elements of GF(2^113) as opaque fixed-width values.
//!
//! Arithmetic on these values lives elsewhere. Here a field element is just
//! its canonical polynomial-basis representation: 113 coefficient bits packed
//! little-endian into two 64-bit limbs.
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Bit length of the field.
pub(crate) const FIELD_DEGREE: u32 = 113;

/// Number of 64-bit limbs used to hold one element.
pub(crate) const LIMBS: usize = (FIELD_DEGREE as usize).div_ceil(64);

/// Bits of the most significant limb that may be set.
const TOP_LIMB_MASK: u64 = u64::MAX >> (64 * LIMBS as u32 - FIELD_DEGREE);

/// An element of GF(2^113).
///
/// The value is the polynomial `sum(c_i * z^i)` for `i < 113`, stored as the
/// integer `sum(c_i * 2^i)`. Every constructor rejects values with bits at or
/// above position 113 so each element has exactly one representation.
///
/// Equality is constant time.
///
/// # Examples
///
/// ```
/// use sect113fun::FieldElement;
/// let x = FieldElement::from_u128(0x1234).unwrap();
/// assert_eq!(x.to_limbs(), [0x1234, 0]);
/// assert_eq!(FieldElement::from_limbs(x.to_limbs()), Some(x));
/// assert!(FieldElement::from_u128(1 << 113).is_none());
/// ```
#[derive(Clone, Copy, Default)]
pub struct FieldElement([u64; LIMBS]);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self([0; LIMBS]);

    /// The multiplicative identity.
    pub const ONE: Self = Self([1, 0]);

    /// Number of 64-bit limbs in the raw representation.
    pub const LIMBS: usize = LIMBS;

    /// Length of the fixed-width big-endian byte encoding.
    pub const BYTES: usize = 15;

    /// Creates an element from its raw little-endian limbs.
    ///
    /// Returns `None` if any bit at or above position 113 is set.
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Option<Self> {
        if limbs[LIMBS - 1] & !TOP_LIMB_MASK != 0 {
            return None;
        }
        Some(Self(limbs))
    }

    /// Builds an element from limbs that are already known to be reduced.
    ///
    /// Only used for limbs read back out of a lookup table where they were
    /// written from valid elements (or masked down to zero).
    #[cfg(feature = "alloc")]
    pub(crate) const fn from_limbs_unchecked(limbs: [u64; LIMBS]) -> Self {
        Self(limbs)
    }

    /// The raw little-endian limbs of this element.
    pub const fn to_limbs(&self) -> [u64; LIMBS] {
        self.0
    }

    /// Interprets a `u128` as the bit-packed polynomial.
    ///
    /// Returns `None` if the value needs more than 113 bits.
    pub const fn from_u128(value: u128) -> Option<Self> {
        Self::from_limbs([value as u64, (value >> 64) as u64])
    }

    /// The bit-packed polynomial as a `u128`.
    pub const fn to_u128(&self) -> u128 {
        (self.0[1] as u128) << 64 | self.0[0] as u128
    }

    /// Decodes the 15-byte big-endian encoding.
    ///
    /// Returns `None` if the encoded integer does not fit in 113 bits.
    pub fn from_bytes(bytes: [u8; 15]) -> Option<Self> {
        let mut buf = [0u8; 16];
        buf[1..].copy_from_slice(&bytes);
        Self::from_u128(u128::from_be_bytes(buf))
    }

    /// The 15-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 15] {
        let mut bytes = [0u8; 15];
        bytes.copy_from_slice(&self.to_u128().to_be_bytes()[1..]);
        bytes
    }

    /// Samples an element uniformly at random.
    ///
    /// # Examples
    ///
    /// ```
    /// use sect113fun::FieldElement;
    /// let x = FieldElement::random(&mut rand::thread_rng());
    /// assert!(FieldElement::from_limbs(x.to_limbs()).is_some());
    /// ```
    pub fn random(rng: &mut impl RngCore) -> Self {
        let mut limbs = [0u64; LIMBS];
        for limb in limbs.iter_mut() {
            *limb = rng.next_u64();
        }
        limbs[LIMBS - 1] &= TOP_LIMB_MASK;
        Self(limbs)
    }

    /// Whether this is the zero element (constant time).
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO).into()
    }

    /// Whether this is the one element (constant time).
    pub fn is_one(&self) -> bool {
        self.ct_eq(&Self::ONE).into()
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0]) & self.0[1].ct_eq(&other.0[1])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
        ])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl core::hash::Hash for FieldElement {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl From<FieldElement> for u128 {
    fn from(fe: FieldElement) -> Self {
        fe.to_u128()
    }
}

crate::impl_fromstr_deserialize! {
    name => "sect113 field element",
    fn from_bytes(bytes: [u8;15]) -> Option<FieldElement> {
        FieldElement::from_bytes(bytes)
    }
}

crate::impl_display_debug_serialize! {
    fn to_bytes(fe: &FieldElement) -> [u8;15] {
        fe.to_bytes()
    }
}
