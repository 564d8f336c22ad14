//! The [`Cell`] type: classification of a single field square.

/// Glyph used for the path overlay when rendering a solved map.
pub const PATH_GLYPH: char = '*';

/// One square of a field, as built or as decoded from the wire.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Blocked,
    Start,
    Finish,
    /// Spacer column inserted by the encoder between real cells.
    ///
    /// Passable sideways, never a landing target for a vertical move.
    Separator,
    /// Glyph outside the wire alphabet. Passable, kept for re-encoding.
    Unknown(char),
}

impl Cell {
    /// Wire glyph for this cell.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Blocked => 'X',
            Self::Start => 'S',
            Self::Finish => 'F',
            Self::Separator => ' ',
            Self::Unknown(ch) => ch,
        }
    }

    /// Classify a wire glyph.
    #[inline]
    pub const fn from_glyph(ch: char) -> Self {
        match ch {
            '.' => Self::Empty,
            'X' => Self::Blocked,
            'S' => Self::Start,
            'F' => Self::Finish,
            ' ' => Self::Separator,
            other => Self::Unknown(other),
        }
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    #[inline]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Separator)
    }

    /// Start or finish marker.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, Self::Start | Self::Finish)
    }
}
