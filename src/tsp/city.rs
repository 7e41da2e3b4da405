//! Cities and random instance generation.

use crate::error::{GaError, Result};
use rand::Rng;

/// A city at integer coordinates. Duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: i32,
    pub y: i32,
}

impl City {
    pub fn new(x: i32, y: i32) -> Self {
        City { x, y }
    }

    /// Euclidean distance between two cities.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Inclusive rectangle cities are sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Default for Bounds {
    /// A 500x300 canvas with a 20-unit margin.
    fn default() -> Self {
        Bounds {
            x_min: 20,
            x_max: 480,
            y_min: 20,
            y_max: 280,
        }
    }
}

impl Bounds {
    pub fn contains(&self, city: &City) -> bool {
        (self.x_min..=self.x_max).contains(&city.x) && (self.y_min..=self.y_max).contains(&city.y)
    }
}

/// Samples `count` cities uniformly inside `bounds`.
///
/// Fails when `count < 2` or the bounds are inverted.
pub fn generate_cities<R: Rng>(count: usize, bounds: &Bounds, rng: &mut R) -> Result<Vec<City>> {
    if count < 2 {
        return Err(GaError::invalid(format!(
            "city_count must be at least 2, got {count}"
        )));
    }
    if bounds.x_min > bounds.x_max || bounds.y_min > bounds.y_max {
        return Err(GaError::invalid(format!("empty bounds: {bounds:?}")));
    }
    Ok((0..count)
        .map(|_| {
            City::new(
                rng.random_range(bounds.x_min..=bounds.x_max),
                rng.random_range(bounds.y_min..=bounds.y_max),
            )
        })
        .collect())
}
