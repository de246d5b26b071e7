// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides common features used throughout the pairgen workspace.
//!
//! # Features
//!   * `sub-time` Print the timings for all the [sub_time_it] calls.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

pub use u_vec::UVec;

mod u_vec;

/// The value marking a cell of a partial row as unbound.
///
/// A cell holding this value carries no binding: constraint evaluation treats
/// it as unknown. It is never a legal value id, as domains are far smaller.
pub const DONT_CARE: usize = !0;

/// This is the type of the elements of the pair bit sets.
pub type BitArray = u64;

/// The mask used to get the index of the specific bit in the array.
pub const BIT_MASK: usize = std::mem::size_of::<BitArray>() * 8 - 1;

/// The number of bits to shift to get the index of the element in the bit set.
pub const BIT_SHIFT: usize = BIT_MASK.count_ones() as usize;

/// Print the time it took to provide the result of the provided expression.
/// Returns the result of the provided expression.
///
/// # Example
/// ```
/// use common::time_it;
///
/// time_it!(0 + 1, "Addition");
/// ```
#[macro_export]
macro_rules! time_it {
    ($code:expr, $text:expr) => {{
        let now = std::time::Instant::now();
        let result = $code;
        let duration = now.elapsed();
        println!("{} takes: {}.{:06}s", $text, duration.as_secs(), duration.subsec_micros());
        result
    }};
}

/// Act like [time_it] if the `sub-time` feature is set. Otherwise return the provided expression.
///
/// # Example
/// ```
/// use common::sub_time_it;
///
/// sub_time_it!(0 + 1, "Addition");
/// ```
///
/// The `sub-time` feature has been set.
#[cfg(feature = "sub-time")]
#[macro_export]
macro_rules! sub_time_it {
    ($code:expr, $text:expr) => {{
        let now = std::time::Instant::now();
        let result = $code;
        let duration = now.elapsed();
        println!("{} takes: {}.{:06}s", $text, duration.as_secs(), duration.subsec_micros());
        result
    }};
}

/// Act like [time_it] if the `sub-time` feature is set. Otherwise return the provided expression.
///
/// # Example
/// ```
/// use common::sub_time_it;
///
/// sub_time_it!(0 + 1, "Addition");
/// ```
///
/// The `sub-time` feature has not been set.
#[cfg(not(feature = "sub-time"))]
#[macro_export]
macro_rules! sub_time_it {
    ($code:expr, $text:expr) => {{$code}};
}
