// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Ready-made swipe direction tags.
//!
//! The stack model is generic over its direction type, so callers are free
//! to bring their own (any equatable tag works). [`SwipeDirection`] is the
//! batteries-included default covering the four cardinal gestures.

use crate::base::Error;
use std::fmt;
use std::str::FromStr;

/// The four cardinal swipe directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// A swipe toward the left edge.
    Left,
    /// A swipe toward the right edge.
    Right,
    /// A swipe toward the top edge.
    Up,
    /// A swipe toward the bottom edge.
    Down,
}

impl SwipeDirection {
    /// Maps a gesture angle to the nearest cardinal direction.
    ///
    /// Angles are in degrees, measured counter-clockwise with 0 pointing
    /// right. Any finite value is accepted and normalized into `[0, 360)`;
    /// non-finite input returns `None`.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let normalized = degrees.rem_euclid(360.0);
        let direction = if normalized < 45.0 {
            Self::Right
        } else if normalized < 135.0 {
            Self::Up
        } else if normalized < 225.0 {
            Self::Left
        } else if normalized < 315.0 {
            Self::Down
        } else {
            Self::Right
        };
        Some(direction)
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Left => write!(f, "left"),
            SwipeDirection::Right => write!(f, "right"),
            SwipeDirection::Up => write!(f, "up"),
            SwipeDirection::Down => write!(f, "down"),
        }
    }
}

impl FromStr for SwipeDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else if s.eq_ignore_ascii_case("up") {
            Ok(Self::Up)
        } else if s.eq_ignore_ascii_case("down") {
            Ok(Self::Down)
        } else {
            Err(Error::UnknownDirection(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_cardinal_angles() {
        assert_eq!(SwipeDirection::from_degrees(0.0), Some(SwipeDirection::Right));
        assert_eq!(SwipeDirection::from_degrees(90.0), Some(SwipeDirection::Up));
        assert_eq!(SwipeDirection::from_degrees(180.0), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::from_degrees(270.0), Some(SwipeDirection::Down));
    }

    #[test]
    fn test_from_degrees_boundaries() {
        assert_eq!(SwipeDirection::from_degrees(44.9), Some(SwipeDirection::Right));
        assert_eq!(SwipeDirection::from_degrees(45.0), Some(SwipeDirection::Up));
        assert_eq!(SwipeDirection::from_degrees(135.0), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::from_degrees(225.0), Some(SwipeDirection::Down));
        assert_eq!(SwipeDirection::from_degrees(315.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_from_degrees_normalizes() {
        assert_eq!(SwipeDirection::from_degrees(-90.0), Some(SwipeDirection::Down));
        assert_eq!(SwipeDirection::from_degrees(450.0), Some(SwipeDirection::Up));
        assert_eq!(SwipeDirection::from_degrees(720.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_from_degrees_rejects_non_finite() {
        assert_eq!(SwipeDirection::from_degrees(f64::NAN), None);
        assert_eq!(SwipeDirection::from_degrees(f64::INFINITY), None);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for direction in [
            SwipeDirection::Left,
            SwipeDirection::Right,
            SwipeDirection::Up,
            SwipeDirection::Down,
        ] {
            let parsed: SwipeDirection = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("LEFT".parse::<SwipeDirection>().unwrap(), SwipeDirection::Left);
        assert_eq!("Up".parse::<SwipeDirection>().unwrap(), SwipeDirection::Up);
    }

    #[test]
    fn test_parse_unknown_direction() {
        let err = "sideways".parse::<SwipeDirection>().unwrap_err();
        assert!(matches!(err, Error::UnknownDirection(name) if name == "sideways"));
    }
}
