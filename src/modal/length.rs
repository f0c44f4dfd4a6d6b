use std::fmt;
use std::str::FromStr;

/// Horizontal pixels represented by one terminal cell.
pub const PX_PER_CELL: u16 = 8;

/// A CSS-style length applied to the dialog width.
///
/// Accepted forms: `400px`, `60%`, `48ch` and bare cell counts like `48`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Px(u16),
    Percent(u16),
    Cells(u16),
}

impl Default for Length {
    fn default() -> Self {
        Self::Px(400)
    }
}

impl Length {
    /// Width in cells within `available` cells, never wider than `available`.
    pub fn resolve(self, available: u16) -> u16 {
        let cells = match self {
            Self::Px(px) => px.div_ceil(PX_PER_CELL),
            Self::Percent(percent) => {
                let scaled = u32::from(available) * u32::from(percent.min(100)) / 100;
                u16::try_from(scaled).unwrap_or(available)
            }
            Self::Cells(cells) => cells,
        };
        cells.max(1).min(available)
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, build): (&str, fn(u16) -> Self) = if let Some(n) = s.strip_suffix("px") {
            (n, Self::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = s.strip_suffix("ch") {
            (n, Self::Cells)
        } else {
            (s, Self::Cells)
        };

        let value: u16 = number
            .trim()
            .parse()
            .map_err(|_| format!("Invalid length: {s}"))?;
        if value == 0 {
            return Err(format!("Length must be positive: {s}"));
        }
        Ok(build(value))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(percent) => write!(f, "{percent}%"),
            Self::Cells(cells) => write!(f, "{cells}ch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("400px".parse(), Ok(Length::Px(400)));
        assert_eq!(" 60% ".parse(), Ok(Length::Percent(60)));
        assert_eq!("48ch".parse(), Ok(Length::Cells(48)));
        assert_eq!("30".parse(), Ok(Length::Cells(30)));
        assert!("wide".parse::<Length>().is_err());
        assert!("0px".parse::<Length>().is_err());
        assert!("-4px".parse::<Length>().is_err());
    }

    #[test]
    fn test_resolve_px_rounds_up_to_cells() {
        assert_eq!(Length::Px(400).resolve(200), 50);
        assert_eq!(Length::Px(200).resolve(200), 25);
        assert_eq!(Length::Px(1).resolve(200), 1);
    }

    #[test]
    fn test_resolve_clamps_to_available() {
        assert_eq!(Length::Px(400).resolve(30), 30);
        assert_eq!(Length::Percent(50).resolve(81), 40);
        assert_eq!(Length::Percent(150).resolve(40), 40);
        assert_eq!(Length::Cells(10).resolve(0), 0);
    }

    #[test]
    fn test_display_is_css() {
        assert_eq!(Length::default().to_string(), "400px");
        assert_eq!(Length::Percent(25).to_string(), "25%");
    }
}
