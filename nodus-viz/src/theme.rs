//! Visual themes for rendered graphs.
//!
//! A theme controls the background/text/edge palette only, never the
//! layout.

use std::str::FromStr;

/// Palette values for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub font_color: &'static str,
    pub default_node_color: &'static str,
    pub edge_font_stroke: &'static str,
}

const DARK: ThemePalette = ThemePalette {
    background: "#222222",
    font_color: "white",
    default_node_color: "#7f7f7f",
    edge_font_stroke: "#000000",
};

const LIGHT: ThemePalette = ThemePalette {
    background: "#ffffff",
    font_color: "black",
    default_node_color: "#7f7f7f",
    edge_font_stroke: "#ffffff",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn palette(&self) -> &'static ThemePalette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
