//! Hex color parsing.

use std::str::FromStr;

use crate::art::Rgb;
use crate::error::ColorError;

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parse `#RGB` or `#RRGGBB`. The `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim_start_matches('#');
        let len = hex.chars().count();
        if len != 3 && len != 6 {
            return Err(ColorError::InvalidLength { len });
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex {
                value: hex.to_string(),
            });
        }

        let expanded: String = if len == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };
        let channel = |i: usize| {
            u32::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| ColorError::InvalidHex {
                value: hex.to_string(),
            })
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}
