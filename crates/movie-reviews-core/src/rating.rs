// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Average rating computation.
//!
//! A movie's `average_rating` is the arithmetic mean of its review ratings,
//! rounded half-up to one decimal place, or `0.0` when it has no reviews.
//!
//! Rounding is done on integers so that values such as `3.25` or `3.35`
//! round the same way regardless of their binary representation:
//!
//! ```text
//! tenths = (20 * sum + n) / (2 * n)    // floor division
//! average = tenths / 10
//! ```
//!
//! # Example
//!
//! ```rust
//! use movie_reviews_core::average_rating;
//!
//! assert_eq!(average_rating([5, 3]), 4.0);
//! assert_eq!(average_rating([3, 3, 4, 3]), 3.3);
//! assert_eq!(average_rating(std::iter::empty()), 0.0);
//! ```

/// Compute the rounded mean of `ratings`.
///
/// Returns `0.0` for an empty input. Ratings are expected to be
/// non-negative; review validation keeps them within `1..=5`.
pub fn average_rating<I>(ratings: I) -> f64
where
    I: IntoIterator<Item = i32>
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0_i64, 0_i64), |(sum, count), rating| {
            (sum + i64::from(rating), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    let tenths = (20 * sum + count) / (2 * count);
    tenths as f64 / 10.0
}
