use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{CheckedAdd, Zero};

/// A trait representing a capacity (and flow) type which is typically an integer.
///
/// Both signed and unsigned integers qualify. Signed values are validated at construction time,
/// so inside a [`FlowGraph`](crate::graph::FlowGraph) every capacity is non-negative.
pub trait Capacity:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + CheckedAdd
    + Debug
    + Display
    + Default
{
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Capacity for i32 {}

impl Capacity for i64 {}

impl Capacity for u32 {}

impl Capacity for u64 {}

impl Capacity for usize {}
