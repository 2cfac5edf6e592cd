//! Pivot labels and trend modes.

use std::fmt;

use crate::error::{Error, Result};

/// Label attached to every index of a scanned series.
///
/// The discriminants match the integer encoding used by array consumers:
/// `-1` valley, `0` no pivot, `1` peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum PivotLabel {
    /// Local minimum confirmed by a rise of at least `up_thresh`.
    Valley = -1,
    /// Not a pivot.
    #[default]
    None = 0,
    /// Local maximum confirmed by a fall of at least `down_thresh`.
    Peak = 1,
}

impl PivotLabel {
    /// Returns the integer encoding (`-1`, `0` or `1`).
    #[inline]
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Returns `true` for peaks and valleys.
    #[inline]
    #[must_use]
    pub const fn is_pivot(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the label with the opposite sign. `None` stays `None`.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Valley => Self::Peak,
            Self::None => Self::None,
            Self::Peak => Self::Valley,
        }
    }
}

impl From<PivotLabel> for i8 {
    fn from(label: PivotLabel) -> Self {
        label.as_i8()
    }
}

impl TryFrom<i64> for PivotLabel {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Self::Valley),
            0 => Ok(Self::None),
            1 => Ok(Self::Peak),
            _ => Err(Error::InvalidPivotLabel { value }),
        }
    }
}

impl TryFrom<i8> for PivotLabel {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self> {
        Self::try_from(i64::from(value))
    }
}

impl fmt::Display for PivotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Direction of the series between two consecutive pivots.
///
/// Also the two-state trend of the scanners: `Down` while searching for the
/// next valley, `Up` while searching for the next peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum TrendMode {
    /// Falling from a peak towards a valley.
    Down = -1,
    /// Rising from a valley towards a peak.
    Up = 1,
}

impl TrendMode {
    /// Returns the integer encoding (`-1` or `1`).
    #[inline]
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// The pivot that ends a move in this direction: an up-move ends in a
    /// peak, a down-move in a valley.
    #[inline]
    #[must_use]
    pub const fn terminal_label(self) -> PivotLabel {
        match self {
            Self::Down => PivotLabel::Valley,
            Self::Up => PivotLabel::Peak,
        }
    }

    /// The mode with the same sign as `label`, or `None` for
    /// [`PivotLabel::None`].
    #[inline]
    #[must_use]
    pub const fn from_label(label: PivotLabel) -> Option<Self> {
        match label {
            PivotLabel::Valley => Some(Self::Down),
            PivotLabel::None => None,
            PivotLabel::Peak => Some(Self::Up),
        }
    }
}

impl From<TrendMode> for i8 {
    fn from(mode: TrendMode) -> Self {
        mode.as_i8()
    }
}

impl fmt::Display for TrendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Converts a label slice to its integer encoding.
#[must_use]
pub fn labels_to_i8(labels: &[PivotLabel]) -> Vec<i8> {
    labels.iter().map(|&l| l.as_i8()).collect()
}

/// Parses an integer-encoded pivot array.
///
/// # Errors
///
/// Returns `Error::InvalidPivotLabel` for the first value outside `{-1, 0, 1}`.
pub fn labels_from_i8(raw: &[i8]) -> Result<Vec<PivotLabel>> {
    raw.iter().map(|&v| PivotLabel::try_from(v)).collect()
}
