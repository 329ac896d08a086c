use crate::json::{Arguments, Constructor, serialize_js_number};
use anyhow::Result;
use core::f64::consts::PI;
use serde::{Deserialize, Serialize};

/// Replace a missing (NaN) dimension with zero.
#[inline]
fn or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// An axis-aligned rectangle with a width and a height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(serialize_with = "serialize_js_number")]
    pub width: f64,
    #[serde(serialize_with = "serialize_js_number")]
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: or_zero(width),
            height: or_zero(height),
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Constructor for Rectangle {
    fn construct(mut args: Arguments) -> Result<Self> {
        let width = args.next_f64("width")?.unwrap_or(0.0);
        let height = args.next_f64("height")?.unwrap_or(0.0);
        Ok(Self::new(width, height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(serialize_with = "serialize_js_number")]
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: or_zero(radius),
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Constructor for Circle {
    fn construct(mut args: Arguments) -> Result<Self> {
        Ok(Self::new(args.next_f64("radius")?.unwrap_or(0.0)))
    }
}
