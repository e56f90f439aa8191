//! Functions used to generate test data for property-based testing with [`proptest`].
//!
//! [`proptest`]: https://github.com/altsysrq/proptest
use crate::FieldElement;
use std::vec::Vec;
use ::proptest::prelude::*;

prop_compose! {
    /// Generate a random `FieldElement`.
    pub fn field_element()(
        value in 0u128..(1u128 << 113),
    ) -> FieldElement {
        // the range keeps the value inside the field
        FieldElement::from_u128(value).unwrap_or(FieldElement::ZERO)
    }
}

prop_compose! {
    /// Generate raw `(x, λ)` coordinate pairs for `1..max_len` points.
    pub fn coordinates(max_len: usize)(
        coords in ::proptest::collection::vec((field_element(), field_element()), 1..max_len),
    ) -> Vec<(FieldElement, FieldElement)> {
        coords
    }
}

impl Arbitrary for FieldElement {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            // insert some pathological cases
            1 => Just(FieldElement::ZERO),
            1 => Just(FieldElement::ONE),
            1 => Just(FieldElement::from_u128((1u128 << 113) - 1).unwrap_or(FieldElement::ZERO)),
            27 => field_element(),
        ]
        .boxed()
    }
}
