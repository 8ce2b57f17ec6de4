//! Geometric figures ordered by area.
//!
//! `Figure` is the value type the containers were built to hold. It
//! supplies exactly what they need: a total order (by area, via
//! [`f64::total_cmp`]) and a textual form.
//!
//! Equality is area equality, consistent with the order: a 5x5 rectangle and
//! a square of side 5 compare equal.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed set of planar shapes.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Figure {
    Rectangle { width: f64, height: f64 },
    Square { side: f64 },
    Circle { radius: f64 },
}

impl Figure {
    pub const fn rectangle(width: f64, height: f64) -> Self {
        Figure::Rectangle { width, height }
    }

    pub const fn square(side: f64) -> Self {
        Figure::Square { side }
    }

    pub const fn circle(radius: f64) -> Self {
        Figure::Circle { radius }
    }

    /// Shape name as used in the textual form.
    pub fn name(&self) -> &'static str {
        match self {
            Figure::Rectangle { .. } => "Rectangle",
            Figure::Square { .. } => "Square",
            Figure::Circle { .. } => "Circle",
        }
    }

    /// Enclosed area.
    pub fn area(&self) -> f64 {
        match *self {
            Figure::Rectangle { width, height } => width * height,
            Figure::Square { side } => side * side,
            Figure::Circle { radius } => PI * radius * radius,
        }
    }
}

impl Ord for Figure {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area().total_cmp(&other.area())
    }
}

impl PartialOrd for Figure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Figure {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Figure {}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let area = self.area();
        match *self {
            Figure::Rectangle { width, height } => {
                write!(f, "{name}: height = {height}; width = {width}; area = {area}")
            }
            Figure::Square { side } => write!(f, "{name}:    side = {side}; area = {area}"),
            Figure::Circle { radius } => write!(f, "{name}:    radius = {radius}; area = {area}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas() {
        assert_eq!(Figure::rectangle(30.0, 40.0).area(), 1200.0);
        assert_eq!(Figure::square(5.0).area(), 25.0);
        assert!((Figure::circle(6.0).area() - 113.097_335_529_232_55).abs() < 1e-9);
    }

    #[test]
    fn ordering_is_by_area() {
        let r = Figure::rectangle(30.0, 40.0);
        let s = Figure::square(5.0);
        let c = Figure::circle(6.0);
        assert!(s < c && c < r);
        assert_eq!(Figure::rectangle(5.0, 5.0), s);
        assert_eq!(Figure::rectangle(2.0, 8.0).cmp(&Figure::square(4.0)), Ordering::Equal);
    }

    #[test]
    fn textual_forms() {
        assert_eq!(
            Figure::rectangle(30.0, 40.0).to_string(),
            "Rectangle: height = 40; width = 30; area = 1200"
        );
        assert_eq!(Figure::square(5.0).to_string(), "Square:    side = 5; area = 25");
        assert!(
            Figure::circle(6.0)
                .to_string()
                .starts_with("Circle:    radius = 6; area = 113.09")
        );
    }

    #[test]
    fn serde_tagged_form() {
        let json = serde_json::to_string(&Figure::square(2.0)).unwrap();
        assert_eq!(json, r#"{"kind":"square","side":2.0}"#);
        let back: Figure = serde_json::from_str(r#"{"kind":"circle","radius":1.5}"#).unwrap();
        assert_eq!(back.name(), "Circle");
    }
}
