use serde::{Serialize, Deserialize};

/// One person as read from the dataset. `color` and `location` keep the raw
/// strings so that categories the encoder does not know survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Carried for display only; never encoded.
    pub name: String,
    pub age: i32,
    pub color: String,
    pub location: String,
}

impl Record {
    pub fn new(name: &str, age: i32, color: &str, location: &str) -> Record {
        Record {
            name: name.to_string(),
            age,
            color: color.to_string(),
            location: location.to_string(),
        }
    }
}

/// Colors the encoder knows, in one-hot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Blue, Color::Red, Color::Green];

    /// Accepts the dataset's Portuguese names and their English equivalents.
    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "azul" | "blue" => Some(Color::Blue),
            "vermelho" | "red" => Some(Color::Red),
            "verde" | "green" => Some(Color::Green),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Locations the encoder knows, in one-hot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    SaoPaulo,
    Rio,
    Curitiba,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::SaoPaulo, Location::Rio, Location::Curitiba];

    pub fn from_name(name: &str) -> Option<Location> {
        match name {
            "São Paulo" => Some(Location::SaoPaulo),
            "Rio" => Some(Location::Rio),
            "Curitiba" => Some(Location::Curitiba),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
