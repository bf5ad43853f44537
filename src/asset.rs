//! Map definitions embedded into the binary at compile time.

use glam::UVec2;

/// Built-in serialized maps, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr, strum_macros::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TextAsset {
    /// 8x8 ringed island with a rocky peak.
    Island,
    /// 5x4 walled courtyard.
    Courtyard,
}

impl TextAsset {
    /// Raw serialized cell values for this map.
    ///
    /// Returned exactly as stored, trailing newline included; trim before
    /// decoding.
    pub fn text(self) -> &'static str {
        match self {
            Self::Island => include_str!("../assets/maps/island.txt"),
            Self::Courtyard => include_str!("../assets/maps/courtyard.txt"),
        }
    }

    /// Grid size this map was authored for.
    pub fn size(self) -> UVec2 {
        match self {
            Self::Island => UVec2::new(8, 8),
            Self::Courtyard => UVec2::new(5, 4),
        }
    }
}
