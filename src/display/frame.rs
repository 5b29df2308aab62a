use serde::Serialize;

use crate::core::{Rgb, DISPLAY_FONT_SIZE, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Approximate advance of one bold glyph at DISPLAY_FONT_SIZE
const GLYPH_WIDTH: u32 = DISPLAY_FONT_SIZE * 5 / 8;

/// A line of text placed at a pixel position (top-left corner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

/// Everything currently drawn on the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub background: Rgb,
    pub lines: Vec<TextLine>,
}

impl Frame {
    /// Empty white frame
    pub fn blank() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            font_size: DISPLAY_FONT_SIZE,
            background: Rgb::WHITE,
            lines: Vec::new(),
        }
    }

    /// "THUNDERDOME / IS WAITING" in black on white
    pub fn startup_banner() -> Self {
        Self {
            lines: vec![
                TextLine {
                    text: "THUNDERDOME".to_string(),
                    x: 110,
                    y: 250,
                    color: Rgb::BLACK,
                },
                TextLine {
                    text: "IS WAITING".to_string(),
                    x: 160,
                    y: 320,
                    color: Rgb::BLACK,
                },
            ],
            ..Self::blank()
        }
    }

    /// Winner's color as background with their name centered in black
    pub fn winner(color: Rgb, name: &str) -> Self {
        let (x, y) = centered_origin(name);
        Self {
            background: color,
            lines: vec![TextLine {
                text: name.to_string(),
                x,
                y,
                color: Rgb::BLACK,
            }],
            ..Self::blank()
        }
    }
}

/// Top-left corner that centers `text` on the display
fn centered_origin(text: &str) -> (u32, u32) {
    let text_width = GLYPH_WIDTH.saturating_mul(text.chars().count() as u32);
    let x = (DISPLAY_WIDTH / 2).saturating_sub(text_width / 2);
    let y = (DISPLAY_HEIGHT / 2).saturating_sub(DISPLAY_FONT_SIZE / 2);
    (x, y)
}
