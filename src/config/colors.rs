//! Display colors per shift.

use serde::{Deserialize, Serialize};

use crate::calendar::types::Shift;
use crate::error::{Result, ValidationError};

/// Light and dark theme color of one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftColor {
    pub light: String,
    pub dark: String,
}

impl ShiftColor {
    fn new(light: &str, dark: &str) -> Self {
        Self {
            light: light.to_string(),
            dark: dark.to_string(),
        }
    }
}

/// Colors of all four shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftColors {
    pub early: ShiftColor,
    pub midday: ShiftColor,
    pub night: ShiftColor,
    pub off: ShiftColor,
}

impl Default for ShiftColors {
    fn default() -> Self {
        Self {
            early: ShiftColor::new("#fecaca", "#7f1d1d"),
            midday: ShiftColor::new("#bfdbfe", "#1e3a8a"),
            night: ShiftColor::new("#e9d5ff", "#581c87"),
            off: ShiftColor::new("#dcfce7", "#14532d"),
        }
    }
}

impl ShiftColors {
    pub fn for_shift(&self, shift: Shift) -> &ShiftColor {
        match shift {
            Shift::Early => &self.early,
            Shift::Midday => &self.midday,
            Shift::Night => &self.night,
            Shift::Off => &self.off,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for shift in Shift::ALL {
            let color = self.for_shift(shift);
            parse_hex(&color.light)?;
            parse_hex(&color.dark)?;
        }
        Ok(())
    }
}

/// Text color that stays readable on a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Black,
    White,
}

/// Parse `#RRGGBB` into its channels.
pub fn parse_hex(color: &str) -> Result<(u8, u8, u8)> {
    let invalid = || ValidationError::InvalidColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid().into());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Pick black or white text by the perceived luminance of `background`.
pub fn text_tone(background: &str) -> Result<TextTone> {
    let (r, g, b) = parse_hex(background)?;
    let luminance = f64::from(r) * 0.299 + f64::from(g) * 0.587 + f64::from(b) * 0.114;
    Ok(if luminance > 186.0 {
        TextTone::Black
    } else {
        TextTone::White
    })
}
