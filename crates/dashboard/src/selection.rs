use serde::{Deserialize, Deserializer, Serialize};

use stockview_core::Sku;

/// Row ordering offered by the sort radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Lexicographic by SKU.
    #[default]
    #[serde(rename = "item_asc")]
    ItemAsc,
    /// Highest preferred stock level first.
    #[serde(rename = "psl_desc")]
    PslDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::ItemAsc, SortMode::PslDesc];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::ItemAsc => "Item Name (ASC)",
            SortMode::PslDesc => "PSL (DESC)",
        }
    }
}

/// Optional chart series. Available stock is always drawn and is not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Series {
    #[serde(rename = "PSL")]
    Psl,
    #[serde(rename = "On Order")]
    OnOrder,
    #[serde(rename = "ROP")]
    Rop,
}

impl Series {
    /// Checklist order.
    pub const ALL: [Series; 3] = [Series::Psl, Series::OnOrder, Series::Rop];

    pub fn label(self) -> &'static str {
        match self {
            Series::Psl => "Preferred Stock Level (PSL)",
            Series::OnOrder => "On Order Quantity",
            Series::Rop => "Reorder Point (ROP)",
        }
    }
}

/// Current state of every dashboard control.
///
/// Empty `skus` / `prefixes` mean "no restriction". Missing fields take the
/// page defaults; explicit `null` means an empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSelection {
    #[serde(deserialize_with = "null_as_default")]
    pub series: Vec<Series>,
    pub sort: SortMode,
    #[serde(deserialize_with = "null_as_default")]
    pub skus: Vec<Sku>,
    #[serde(deserialize_with = "null_as_default")]
    pub prefixes: Vec<String>,
}

impl Default for ViewSelection {
    fn default() -> Self {
        Self {
            series: Series::ALL.to_vec(),
            sort: SortMode::default(),
            skus: Vec::new(),
            prefixes: Vec::new(),
        }
    }
}

impl ViewSelection {
    pub fn shows(&self, series: Series) -> bool {
        self.series.contains(&series)
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_series(mut self, series: impl IntoIterator<Item = Series>) -> Self {
        self.series = series.into_iter().collect();
        self
    }

    pub fn with_skus(mut self, skus: impl IntoIterator<Item = Sku>) -> Self {
        self.skus = skus.into_iter().collect();
        self
    }

    pub fn with_prefixes<S: Into<String>>(mut self, prefixes: impl IntoIterator<Item = S>) -> Self {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
