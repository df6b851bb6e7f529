/// Visual tag assigned to a range based on which of three fixed id buckets
/// it falls within. Ranges outside every bucket carry no swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swatch {
    Crimson,
    Verdant,
    Azure,
}

impl Swatch {
    /// Resolve the swatch for an id interval.
    ///
    /// Buckets are evaluated in order and the first match wins. Pure and
    /// total: same bounds, same answer, no failure path.
    #[must_use]
    pub fn for_range(start: u32, end: u32) -> Option<Self> {
        if start >= 1 && end <= 5 {
            Some(Self::Crimson)
        } else if start >= 6 && end <= 11 {
            Some(Self::Verdant)
        } else if start >= 12 && end <= 17 {
            Some(Self::Azure)
        } else {
            None
        }
    }

    /// sRGB components used wherever this swatch is drawn.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Crimson => (242, 127, 111),
            Self::Verdant => (96, 216, 96),
            Self::Azure => (64, 191, 241),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crimson => "crimson",
            Self::Verdant => "verdant",
            Self::Azure => "azure",
        }
    }
}
