use std::fmt;

use anyhow::{Result, anyhow};
use colorsys::Rgb;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;
pub const DEFAULT_STROKE_COLOUR: Colour = Colour::WHITE;

/// Blue, green, magenta, black, cyan, grey
pub const PALETTE: [Colour; 6] = [
    Colour::new(0x00, 0x00, 0xff),
    Colour::new(0x00, 0xff, 0x00),
    Colour::new(0xff, 0x00, 0xff),
    Colour::new(0x00, 0x00, 0x00),
    Colour::new(0x00, 0xff, 0xff),
    Colour::new(0x88, 0x88, 0x88),
];

/// Opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    pub fn from_hex_str(hex: &str) -> Result<Self> {
        let rgb = Rgb::from_hex_str(hex)
            .map_err(|e| anyhow!("Invalid colour \"{}\": {:?}", hex, e))?;
        let [r, g, b]: [u8; 3] = rgb.into();
        Ok(Colour { r, g, b })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How each ring gets its colour.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ColourMode {
    /// A fully random colour for every ring
    #[default]
    Random,
    /// A random pick from the fixed palette
    Palette,
    /// Every ring uses the configured stroke colour
    Stroke,
}

/// Raw attributes as they appear in a style file. Keys not listed here are ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    pub stroke_width: Option<f32>,
    pub stroke_color: Option<String>,
    pub colour_mode: Option<ColourMode>,
}

impl StyleAttributes {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str::<StyleAttributes>(text)
            .map_err(|e| anyhow!("Failed to parse style attributes: {}", e))
    }

    /// Values set in `other` win.
    pub fn merge(self, other: StyleAttributes) -> StyleAttributes {
        StyleAttributes {
            stroke_width: other.stroke_width.or(self.stroke_width),
            stroke_color: other.stroke_color.or(self.stroke_color),
            colour_mode: other.colour_mode.or(self.colour_mode),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    stroke_width: f32,
    stroke_colour: Colour,
    colour_mode: ColourMode,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_colour: DEFAULT_STROKE_COLOUR,
            colour_mode: ColourMode::default(),
        }
    }
}

impl StyleConfig {
    pub fn from_attributes(attributes: &StyleAttributes) -> Result<Self> {
        let stroke_width = attributes.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
        if !stroke_width.is_finite() || stroke_width < 0. {
            return Err(anyhow!(
                "Stroke width must be a finite number >= 0, got {}",
                stroke_width
            ));
        }

        let stroke_colour = match &attributes.stroke_color {
            Some(hex) => Colour::from_hex_str(hex)?,
            None => DEFAULT_STROKE_COLOUR,
        };

        Ok(StyleConfig {
            stroke_width,
            stroke_colour,
            colour_mode: attributes.colour_mode.unwrap_or_default(),
        })
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn stroke_colour(&self) -> Colour {
        self.stroke_colour
    }

    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }
}

/// Read style attributes from a JSON file. A missing file is not an error; the
/// defaults apply.
pub fn load_attributes_from_file(style_file_path: &str) -> Result<StyleAttributes> {
    match std::fs::read_to_string(style_file_path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(
                "Style file not found at {}, will use defaults",
                &style_file_path
            );
            Ok(StyleAttributes::default())
        }
        Err(e) => Err(anyhow!(
            "Failed to read style file \"{}\": {}",
            style_file_path,
            e
        )),
        Ok(s) => {
            info!("Loaded style attributes from \"{}\"", style_file_path);
            let attributes = StyleAttributes::parse(&s)?;
            debug!("Style attributes from file: {:?}", &attributes);
            Ok(attributes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_attributes_given() {
        let style = StyleConfig::from_attributes(&StyleAttributes::default()).unwrap();
        assert_eq!(style.stroke_width(), 1.0);
        assert_eq!(style.stroke_colour(), Colour::WHITE);
        assert_eq!(style.colour_mode(), ColourMode::Random);
        assert_eq!(style, StyleConfig::default());
    }

    #[test]
    fn unrecognised_attributes_are_ignored() {
        let attributes = StyleAttributes::parse(
            r##"{ "strokeWidth": 4.5, "strokeColor": "#ff8000", "background": "pink" }"##,
        )
        .unwrap();
        let style = StyleConfig::from_attributes(&attributes).unwrap();
        assert_eq!(style.stroke_width(), 4.5);
        assert_eq!(style.stroke_colour(), Colour::new(0xff, 0x80, 0x00));
    }

    #[test]
    fn colour_mode_is_camel_case() {
        let attributes = StyleAttributes::parse(r#"{ "colourMode": "palette" }"#).unwrap();
        assert_eq!(attributes.colour_mode, Some(ColourMode::Palette));
    }

    #[test]
    fn rejects_negative_or_nan_stroke_width() {
        for bad in [-1.0, f32::NAN, f32::INFINITY] {
            let attributes = StyleAttributes {
                stroke_width: Some(bad),
                ..Default::default()
            };
            assert!(StyleConfig::from_attributes(&attributes).is_err());
        }
    }

    #[test]
    fn rejects_bad_colour() {
        let attributes = StyleAttributes {
            stroke_color: Some("not a colour".into()),
            ..Default::default()
        };
        assert!(StyleConfig::from_attributes(&attributes).is_err());
    }

    #[test]
    fn later_attributes_override_earlier_ones() {
        let file = StyleAttributes {
            stroke_width: Some(2.0),
            stroke_color: Some("#000000".into()),
            colour_mode: None,
        };
        let cli = StyleAttributes {
            stroke_width: Some(8.0),
            stroke_color: None,
            colour_mode: Some(ColourMode::Stroke),
        };
        let merged = file.merge(cli);
        assert_eq!(merged.stroke_width, Some(8.0));
        assert_eq!(merged.stroke_color.as_deref(), Some("#000000"));
        assert_eq!(merged.colour_mode, Some(ColourMode::Stroke));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let attributes = load_attributes_from_file("./definitely/not/here.json").unwrap();
        assert!(attributes.stroke_width.is_none());
        assert!(attributes.stroke_color.is_none());
    }

    #[test]
    fn colour_displays_as_hex() {
        assert_eq!(Colour::new(0x12, 0xab, 0x00).to_string(), "#12ab00");
    }
}
