//! Integer widths an accumulator can run on.

use num_traits::PrimInt;
use std::fmt::{Debug, Display};

/// A primitive integer usable as an accumulator register.
///
/// Arithmetic and the native range come from [`PrimInt`]; `NAME` is the
/// Rust spelling of the type, used in reports and diagnostics.
pub trait Register: PrimInt + Display + Debug {
    const NAME: &'static str;
}

macro_rules! impl_register {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Register for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

impl_register!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
