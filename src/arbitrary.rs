//! `proptest` integration.
//!
//! Generated brands are unchecked: the strategy produces arbitrary `T` values
//! and brands them with [`Brand::assume`]. Filter with `prop_filter` or build a
//! dedicated strategy when a label's domain is narrower than `T`.

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::strategy::{Map, Strategy};

use crate::brand::Brand;
use crate::label::Label;

impl<T: Arbitrary, L: Label> Arbitrary for Brand<T, L> {
    type Parameters = T::Parameters;
    type Strategy = Map<T::Strategy, fn(T) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<T>(args).prop_map(Brand::assume as fn(T) -> Self)
    }
}
