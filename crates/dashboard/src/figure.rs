//! Chart figure assembly (Plotly-compatible JSON).

use serde::{Deserialize, Serialize};

use stockview_inventory::{InventoryRecord, InventoryTable};

use crate::pipeline::build_view;
use crate::selection::{Series, ViewSelection};

pub const AVAILABLE_COLOR: &str = "rgba(173, 216, 230, 1)";
pub const ON_ORDER_COLOR: &str = "rgba(144, 238, 144, 0.5)";
pub const PSL_COLOR: &str = "rgba(173, 216, 230, 0.5)";
pub const ROP_COLOR: &str = "red";

pub const CHART_TITLE: &str = "Inventory Management";

/// Per-point tooltip payload: description, stock, on order, PSL, ROP.
pub type HoverData = (String, u64, u64, u64, u64);

const HOVER_TEMPLATE: &str = "<b>Item Name:</b> %{x}<br>\
<b>Desc:</b> %{customdata[0]}<br>\
<b>Available:</b> %{customdata[1]}<br>\
<b>On Order:</b> %{customdata[2]}<br>\
<b>PSL:</b> %{customdata[3]}<br>\
<b>ROP:</b> %{customdata[4]}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

/// One chart series.
///
/// `uid` is stable per series (`stock`, `on_order`, `psl`, `rop`) so the
/// client keeps legend state across redraws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub uid: String,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    pub customdata: Vec<HoverData>,
    pub hovertemplate: String,
}

impl Trace {
    fn new(
        kind: TraceKind,
        uid: &str,
        name: &str,
        rows: &[&InventoryRecord],
        y: fn(&InventoryRecord) -> u64,
    ) -> Self {
        Self {
            kind,
            uid: uid.to_string(),
            name: name.to_string(),
            x: rows.iter().map(|r| r.sku.to_string()).collect(),
            y: rows.iter().map(|r| y(*r)).collect(),
            mode: None,
            marker: None,
            line: None,
            customdata: rows
                .iter()
                .map(|r| (r.description.clone(), r.stock, r.on_order, r.psl, r.rop))
                .collect(),
            hovertemplate: HOVER_TEMPLATE.to_string(),
        }
    }

    fn bar(
        uid: &str,
        name: &str,
        color: &str,
        rows: &[&InventoryRecord],
        y: fn(&InventoryRecord) -> u64,
    ) -> Self {
        Self {
            marker: Some(Marker {
                color: color.to_string(),
            }),
            ..Self::new(TraceKind::Bar, uid, name, rows, y)
        }
    }

    fn line(
        uid: &str,
        name: &str,
        mode: &str,
        line: Line,
        rows: &[&InventoryRecord],
        y: fn(&InventoryRecord) -> u64,
    ) -> Self {
        Self {
            mode: Some(mode.to_string()),
            line: Some(line),
            ..Self::new(TraceKind::Scatter, uid, name, rows, y)
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub barmode: String,
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            barmode: "stack".to_string(),
            title: Title {
                text: CHART_TITLE.to_string(),
            },
            xaxis: Axis {
                title: Title {
                    text: "Item Name".to_string(),
                },
                tickangle: Some(-45),
            },
            yaxis: Axis {
                title: Title {
                    text: "Quantity".to_string(),
                },
                tickangle: None,
            },
        }
    }
}

/// Complete chart: traces in draw order plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn trace(&self, uid: &str) -> Option<&Trace> {
        self.data.iter().find(|t| t.uid == uid)
    }

    /// Number of data points across all traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }
}

/// Recompute the chart for the current selection.
///
/// Trace order is fixed: available stock, on order (stacked on stock), PSL,
/// ROP. An empty view yields traces with no points.
pub fn build_figure(table: &InventoryTable, selection: &ViewSelection) -> Figure {
    let rows = build_view(table, selection);

    let mut data = vec![Trace::bar(
        "stock",
        "Available Stock Level",
        AVAILABLE_COLOR,
        &rows,
        |r| r.stock,
    )];

    if selection.shows(Series::OnOrder) {
        data.push(Trace::bar(
            "on_order",
            Series::OnOrder.label(),
            ON_ORDER_COLOR,
            &rows,
            |r| r.on_order,
        ));
    }

    if selection.shows(Series::Psl) {
        data.push(Trace::line(
            "psl",
            Series::Psl.label(),
            "markers+lines",
            Line {
                color: PSL_COLOR.to_string(),
                dash: None,
            },
            &rows,
            |r| r.psl,
        ));
    }

    if selection.shows(Series::Rop) {
        data.push(Trace::line(
            "rop",
            Series::Rop.label(),
            "lines+markers",
            Line {
                color: ROP_COLOR.to_string(),
                dash: Some("dash".to_string()),
            },
            &rows,
            |r| r.rop,
        ));
    }

    tracing::debug!(
        rows = rows.len(),
        traces = data.len(),
        sort = ?selection.sort,
        "figure rebuilt"
    );

    Figure {
        data,
        layout: Layout::default(),
    }
}
