//! Paletas de colores por zona
//!
//! Cada zona de tráfico se identifica por un color. Este módulo resuelve
//! la clave de color que envía el backend a una paleta fija usada por
//! las vistas HTML.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Colores de zona conocidos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneColor {
    Red,
    Green,
    Dhani,
    Saffron,
    Blue,
    Yellow,
    Violet,
    Pink,
}

/// Paleta de colores aplicada a una página
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub primary_light: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub gradient: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
}

/// Error al interpretar una clave de color
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone color '{0}'")]
pub struct UnknownZoneColor(pub String);

impl ZoneColor {
    pub const ALL: [ZoneColor; 8] = [
        ZoneColor::Red,
        ZoneColor::Green,
        ZoneColor::Dhani,
        ZoneColor::Saffron,
        ZoneColor::Blue,
        ZoneColor::Yellow,
        ZoneColor::Violet,
        ZoneColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneColor::Red => "red",
            ZoneColor::Green => "green",
            ZoneColor::Dhani => "dhani",
            ZoneColor::Saffron => "saffron",
            ZoneColor::Blue => "blue",
            ZoneColor::Yellow => "yellow",
            ZoneColor::Violet => "violet",
            ZoneColor::Pink => "pink",
        }
    }

    /// Paleta asociada al color
    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            ZoneColor::Red => &RED,
            ZoneColor::Green => &GREEN,
            // dhani y saffron comparten la tabla lima
            ZoneColor::Dhani | ZoneColor::Saffron => &LIME,
            ZoneColor::Blue => &BLUE,
            ZoneColor::Yellow => &YELLOW,
            ZoneColor::Violet => &VIOLET,
            ZoneColor::Pink => &PINK,
        }
    }
}

impl fmt::Display for ZoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneColor {
    type Err = UnknownZoneColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ZoneColor::ALL
            .into_iter()
            .find(|color| color.as_str() == key)
            .ok_or_else(|| UnknownZoneColor(s.to_string()))
    }
}

/// Color usado cuando la clave no es reconocida
pub const DEFAULT_ZONE_COLOR: ZoneColor = ZoneColor::Blue;

/// Resolver una clave de color a su paleta.
///
/// Nunca falla: una clave desconocida devuelve la paleta azul.
pub fn resolve_theme(key: &str) -> &'static ThemePalette {
    key.parse::<ZoneColor>()
        .unwrap_or(DEFAULT_ZONE_COLOR)
        .palette()
}

static RED: ThemePalette = ThemePalette {
    primary: "rgb(220, 38, 38)",
    primary_dark: "rgb(185, 28, 28)",
    primary_light: "rgb(254, 226, 226)",
    secondary: "rgb(248, 113, 113)",
    accent: "rgb(239, 68, 68)",
    gradient: "linear-gradient(135deg, rgb(220, 38, 38) 0%, rgb(239, 68, 68) 100%)",
    text: "rgb(127, 29, 29)",
    badge: "bg-red-100 text-red-700 border-red-300",
};

static GREEN: ThemePalette = ThemePalette {
    primary: "rgb(22, 163, 74)",
    primary_dark: "rgb(21, 128, 61)",
    primary_light: "rgb(220, 252, 231)",
    secondary: "rgb(74, 222, 128)",
    accent: "rgb(34, 197, 94)",
    gradient: "linear-gradient(135deg, rgb(22, 163, 74) 0%, rgb(34, 197, 94) 100%)",
    text: "rgb(20, 83, 45)",
    badge: "bg-green-100 text-green-700 border-green-300",
};

static LIME: ThemePalette = ThemePalette {
    primary: "rgb(132, 204, 22)",
    primary_dark: "rgb(77, 124, 15)",
    primary_light: "rgb(236, 252, 203)",
    secondary: "rgb(190, 242, 100)",
    accent: "rgb(101, 163, 13)",
    gradient: "linear-gradient(135deg, rgb(132, 204, 22) 0%, rgb(163, 230, 53) 100%)",
    text: "rgb(54, 83, 20)",
    badge: "bg-lime-100 text-lime-700 border-lime-300",
};

static BLUE: ThemePalette = ThemePalette {
    primary: "rgb(37, 99, 235)",
    primary_dark: "rgb(29, 78, 216)",
    primary_light: "rgb(219, 234, 254)",
    secondary: "rgb(96, 165, 250)",
    accent: "rgb(59, 130, 246)",
    gradient: "linear-gradient(135deg, rgb(37, 99, 235) 0%, rgb(59, 130, 246) 100%)",
    text: "rgb(30, 58, 138)",
    badge: "bg-blue-100 text-blue-700 border-blue-300",
};

static YELLOW: ThemePalette = ThemePalette {
    primary: "rgb(202, 138, 4)",
    primary_dark: "rgb(161, 98, 7)",
    primary_light: "rgb(254, 249, 195)",
    secondary: "rgb(250, 204, 21)",
    accent: "rgb(234, 179, 8)",
    gradient: "linear-gradient(135deg, rgb(202, 138, 4) 0%, rgb(234, 179, 8) 100%)",
    text: "rgb(113, 63, 18)",
    badge: "bg-yellow-100 text-yellow-700 border-yellow-300",
};

static VIOLET: ThemePalette = ThemePalette {
    primary: "rgb(124, 58, 237)",
    primary_dark: "rgb(109, 40, 217)",
    primary_light: "rgb(237, 233, 254)",
    secondary: "rgb(167, 139, 250)",
    accent: "rgb(139, 92, 246)",
    gradient: "linear-gradient(135deg, rgb(124, 58, 237) 0%, rgb(139, 92, 246) 100%)",
    text: "rgb(76, 29, 149)",
    badge: "bg-violet-100 text-violet-700 border-violet-300",
};

static PINK: ThemePalette = ThemePalette {
    primary: "rgb(219, 39, 119)",
    primary_dark: "rgb(190, 24, 93)",
    primary_light: "rgb(252, 231, 243)",
    secondary: "rgb(244, 114, 182)",
    accent: "rgb(236, 72, 153)",
    gradient: "linear-gradient(135deg, rgb(219, 39, 119) 0%, rgb(236, 72, 153) 100%)",
    text: "rgb(131, 24, 67)",
    badge: "bg-pink-100 text-pink-700 border-pink-300",
};
