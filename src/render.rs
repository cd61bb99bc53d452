use rand::Rng;

use crate::{
    Point2D,
    contacts::Contact,
    style_config::{Colour, ColourMode, PALETTE, StyleConfig},
};

/// Added to the stroke width for each of the three rings, innermost first.
pub const RING_OFFSETS: [f32; 3] = [0.0, 3.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub centre: Point2D,
    pub radius: f32,
    pub stroke_width: f32,
    pub colour: Colour,
}

/// Whatever the host can draw rings onto.
pub trait Surface {
    fn draw_circle(&mut self, circle: &Circle);
}

/// Draw three concentric rings at every contact, each with its own colour.
pub fn render<R, S>(contacts: &[Contact], style: &StyleConfig, rng: &mut R, surface: &mut S)
where
    R: Rng + ?Sized,
    S: Surface + ?Sized,
{
    let w = style.stroke_width();
    for contact in contacts {
        for offset in RING_OFFSETS {
            surface.draw_circle(&Circle {
                centre: contact.position(),
                radius: w + offset,
                stroke_width: w,
                colour: pick_colour(style, rng),
            });
        }
    }
}

fn pick_colour<R: Rng + ?Sized>(style: &StyleConfig, rng: &mut R) -> Colour {
    match style.colour_mode() {
        ColourMode::Random => random_colour(rng),
        ColourMode::Palette => PALETTE[rng.random_range(0..PALETTE.len())],
        ColourMode::Stroke => style.stroke_colour(),
    }
}

/// Channels are drawn from 0..255, so full intensity never comes up.
pub fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    Colour::new(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    )
}
