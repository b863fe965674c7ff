use serde::{Deserialize, Serialize};

use parkade_core::{ParkingError, ParkingResult};

/// Paint color of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Black,
}

/// A car, identified by its registration number.
///
/// Two cars with the same registration are the same car, whatever their color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    registration: String,
    color: Color,
}

impl Car {
    /// Build a car. Fails with `MissingRegistration` for a blank registration.
    pub fn new(registration: impl Into<String>, color: Color) -> ParkingResult<Self> {
        let registration = registration.into().trim().to_string();
        if registration.is_empty() {
            return Err(ParkingError::MissingRegistration);
        }
        Ok(Self {
            registration,
            color,
        })
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_color(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn has_registration(&self, registration: &str) -> bool {
        self.registration == registration
    }
}

impl PartialEq for Car {
    fn eq(&self, other: &Self) -> bool {
        self.registration == other.registration
    }
}

impl Eq for Car {}

impl core::hash::Hash for Car {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.registration.hash(state);
    }
}

impl core::fmt::Display for Car {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({:?})", self.registration, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_registration_is_rejected() {
        assert_eq!(Car::new("", Color::Red), Err(ParkingError::MissingRegistration));
        assert_eq!(Car::new("   ", Color::Red), Err(ParkingError::MissingRegistration));
    }

    #[test]
    fn registration_is_trimmed() {
        let car = Car::new("  AP-1234 ", Color::Blue).unwrap();
        assert_eq!(car.registration(), "AP-1234");
        assert!(car.has_registration("AP-1234"));
    }

    #[test]
    fn equality_is_by_registration() {
        let red = Car::new("AP-1234", Color::Red).unwrap();
        let blue = Car::new("AP-1234", Color::Blue).unwrap();
        let other = Car::new("AP-5678", Color::Red).unwrap();
        assert_eq!(red, blue);
        assert_ne!(red, other);
    }

    #[test]
    fn color_queries() {
        let car = Car::new("AP-1234", Color::Green).unwrap();
        assert!(car.is_color(Color::Green));
        assert!(!car.is_color(Color::Yellow));
        assert_eq!(car.color(), Color::Green);
    }

    #[test]
    fn serializes_color_lowercase() {
        let car = Car::new("AP-1234", Color::White).unwrap();
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["color"], "white");
        assert_eq!(json["registration"], "AP-1234");
    }
}
