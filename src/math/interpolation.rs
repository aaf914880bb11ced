//! Piecewise-linear color ramps for mapping heat values to pixels
//!
//! A ramp is a sorted list of color stops over `[0, 1]`; sampling between two stops
//! blends each RGBA channel linearly, and positions outside the range clamp to the
//! nearest end stop.

use num_traits::Float;
use std::error::Error;
use std::fmt;

use crate::io::configuration::{MAX_VALUE, MIN_VALUE};

/// Error type for ramp construction
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Linear blend between `a` and `b`, `t = 0` yields `a`
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    t.mul_add(b - a, a)
}

/// A color anchored at a normalized ramp position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`
    pub position: f64,
    /// RGBA color at this position
    pub color: [u8; 4],
}

/// Piecewise-linear color gradient
#[derive(Debug, Clone)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// Build a ramp from color stops
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than 2 stops are provided
    /// - A stop position lies outside `[0, 1]`
    /// - Stop positions are not strictly increasing
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, InterpolationError> {
        if stops.len() < 2 {
            return Err(InterpolationError::new(
                "Need at least 2 stops for a color ramp",
            ));
        }

        if stops
            .iter()
            .any(|stop| !(0.0..=1.0).contains(&stop.position))
        {
            return Err(InterpolationError::new(
                "Stop positions must lie within [0, 1]",
            ));
        }

        if stops
            .windows(2)
            .any(|pair| matches!(pair, [a, b] if a.position >= b.position))
        {
            return Err(InterpolationError::new(
                "Stop positions must be strictly increasing",
            ));
        }

        Ok(Self { stops })
    }

    /// Transparent cold end through blue, green and yellow to opaque red
    pub fn heat() -> Self {
        Self {
            stops: vec![
                ColorStop {
                    position: 0.0,
                    color: [0, 0, 255, 0],
                },
                ColorStop {
                    position: 0.25,
                    color: [0, 128, 255, 160],
                },
                ColorStop {
                    position: 0.5,
                    color: [0, 255, 0, 200],
                },
                ColorStop {
                    position: 0.75,
                    color: [255, 255, 0, 230],
                },
                ColorStop {
                    position: 1.0,
                    color: [255, 0, 0, 255],
                },
            ],
        }
    }

    /// Opaque black to white
    pub fn grayscale() -> Self {
        Self {
            stops: vec![
                ColorStop {
                    position: 0.0,
                    color: [0, 0, 0, 255],
                },
                ColorStop {
                    position: 1.0,
                    color: [255, 255, 255, 255],
                },
            ],
        }
    }

    /// Color stops in ascending position order
    pub const fn stops(&self) -> &[ColorStop] {
        self.stops.as_slice()
    }

    /// Sample the ramp at normalized position `t`, clamped to `[0, 1]`
    pub fn sample(&self, t: f64) -> [u8; 4] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return [0, 0, 0, 0];
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            if let [lower, upper] = pair
                && t <= upper.position
            {
                let local = (t - lower.position) / (upper.position - lower.position);
                let mut color = [0u8; 4];
                for (channel, (&from, &to)) in color
                    .iter_mut()
                    .zip(lower.color.iter().zip(upper.color.iter()))
                {
                    *channel = lerp(f64::from(from), f64::from(to), local)
                        .round()
                        .clamp(0.0, 255.0) as u8;
                }
                return color;
            }
        }

        last.color
    }

    /// Color for a cell value, normalized over the stored value range
    pub fn color_for_value(&self, value: i32) -> [u8; 4] {
        let span = f64::from(MAX_VALUE - MIN_VALUE);
        self.sample((f64::from(value) - f64::from(MIN_VALUE)) / span)
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::heat()
    }
}
