//! Row variants and display density.

use serde::{Deserialize, Serialize};
use statements_core::DataType;

/// Background of a grid row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// Shaded background for totals and reported line items.
    Light,
    /// Plain background.
    White,
}

/// Visual variant of a body row, derived only from its provenance tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowVariant {
    /// Row background.
    pub background: Background,
    /// Italic text.
    pub italic: bool,
    /// Gray text.
    pub muted: bool,
}

impl RowVariant {
    /// Returns the variant for a row tagged `data_type`.
    ///
    /// Untagged rows render plain on a white background.
    #[must_use]
    pub const fn for_data_type(data_type: Option<DataType>) -> Self {
        match data_type {
            Some(DataType::Financials | DataType::BsMetrics) => Self {
                background: Background::Light,
                italic: false,
                muted: false,
            },
            Some(DataType::Growth | DataType::Metrics | DataType::BsRaw) => Self {
                background: Background::White,
                italic: true,
                muted: true,
            },
            Some(DataType::Operating) | None => Self {
                background: Background::White,
                italic: false,
                muted: false,
            },
        }
    }
}

/// Row density toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Compact rows.
    #[default]
    Concise,
    /// Roomy rows.
    Large,
}

/// Pixel sizes applied uniformly to header and body rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DensityMetrics {
    /// Row height.
    pub row_height: u32,
    /// Font size.
    pub font_size: u32,
    /// Checkbox edge length.
    pub checkbox_size: u32,
}

impl Density {
    /// Returns the sizes for this density.
    #[must_use]
    pub const fn metrics(&self) -> DensityMetrics {
        match self {
            Self::Concise => DensityMetrics {
                row_height: 28,
                font_size: 12,
                checkbox_size: 14,
            },
            Self::Large => DensityMetrics {
                row_height: 40,
                font_size: 14,
                checkbox_size: 18,
            },
        }
    }

    /// Returns the other density.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Concise => Self::Large,
            Self::Large => Self::Concise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_variants() {
        for tag in [DataType::Financials, DataType::BsMetrics] {
            let v = RowVariant::for_data_type(Some(tag));
            assert_eq!(v.background, Background::Light);
            assert!(!v.italic && !v.muted);
        }
        for tag in [DataType::Growth, DataType::Metrics, DataType::BsRaw] {
            let v = RowVariant::for_data_type(Some(tag));
            assert_eq!(v.background, Background::White);
            assert!(v.italic && v.muted);
        }
        let v = RowVariant::for_data_type(Some(DataType::Operating));
        assert_eq!(v.background, Background::White);
        assert!(!v.italic && !v.muted);
    }

    #[test]
    fn test_density_scales_everything() {
        let concise = Density::Concise.metrics();
        let large = Density::Large.metrics();
        assert!(large.row_height > concise.row_height);
        assert!(large.font_size > concise.font_size);
        assert!(large.checkbox_size > concise.checkbox_size);
        assert_eq!(Density::Concise.toggled(), Density::Large);
        assert_eq!(Density::default(), Density::Concise);
    }
}
