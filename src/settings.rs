use anyhow::Result;
use clap::Parser;

use crate::style_config::{ColourMode, StyleAttributes, StyleConfig, load_attributes_from_file};

const WINDOW_WIDTH: f32 = 1024.;
const WINDOW_HEIGHT: f32 = 768.;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional JSON file with style attributes (strokeWidth, strokeColor, colourMode)
    #[arg(long = "styleConfigPath")]
    pub style_config_path: Option<String>,

    /// Radius of the innermost ring, and width of every ring; overrides the style file
    #[arg(long = "strokeWidth")]
    pub stroke_width: Option<f32>,

    /// Stroke colour as hex, e.g. "#ffffff"; overrides the style file
    #[arg(long = "strokeColour")]
    pub stroke_colour: Option<String>,

    /// How rings are coloured; overrides the style file
    #[arg(long = "colourMode", value_enum)]
    pub colour_mode: Option<ColourMode>,

    /// Seed for colours and removal delays, for reproducible runs
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// By default the mouse pointer acts as one more contact;
    /// enable (use) this flag to only react to touch
    #[arg(long = "pointer.disable")]
    pub pointer_disable: bool,

    #[arg(long = "window.width", default_value_t = WINDOW_WIDTH)]
    pub window_width: f32,

    #[arg(long = "window.height", default_value_t = WINDOW_HEIGHT)]
    pub window_height: f32,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}

impl Cli {
    /// Style file attributes (if any), with command-line values on top.
    pub fn style_attributes(&self) -> Result<StyleAttributes> {
        let from_file = match &self.style_config_path {
            Some(path) => load_attributes_from_file(path)?,
            None => StyleAttributes::default(),
        };
        Ok(from_file.merge(StyleAttributes {
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_colour.clone(),
            colour_mode: self.colour_mode,
        }))
    }

    pub fn style_config(&self) -> Result<StyleConfig> {
        StyleConfig::from_attributes(&self.style_attributes()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_config::Colour;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::parse_from(["touch-paint"]);
        assert_eq!(cli.log_level, "info");
        assert!(!cli.pointer_disable);
        assert_eq!(cli.style_config().unwrap(), StyleConfig::default());
    }

    #[test]
    fn command_line_style_overrides() {
        let cli = Cli::parse_from([
            "touch-paint",
            "--strokeWidth",
            "6",
            "--strokeColour",
            "#00ff00",
            "--colourMode",
            "stroke",
            "--seed",
            "12",
        ]);
        let style = cli.style_config().unwrap();
        assert_eq!(style.stroke_width(), 6.0);
        assert_eq!(style.stroke_colour(), Colour::new(0, 0xff, 0));
        assert_eq!(style.colour_mode(), ColourMode::Stroke);
        assert_eq!(cli.seed, Some(12));
    }

    #[test]
    fn bad_stroke_width_is_an_error() {
        let cli = Cli::parse_from(["touch-paint", "--strokeWidth=-2"]);
        assert!(cli.style_config().is_err());
    }
}
