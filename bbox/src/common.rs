pub use anyhow::{ensure, Result};
pub use num_traits::{Float, Num, Zero};
pub use std::ops::Mul;

pub(crate) fn half<T>(value: T) -> T
where
    T: Num,
{
    value / (T::one() + T::one())
}
