//! Dashboard view logic: selection → filtered/sorted rows → chart figure.
//!
//! Everything here is a pure function of the read-only inventory table and
//! the current control selection. No IO, no HTTP.

pub mod controls;
pub mod figure;
pub mod pipeline;
pub mod selection;

pub use controls::{ControlOption, ControlOptions};
pub use figure::{build_figure, Figure, HoverData, Layout, Trace, TraceKind};
pub use pipeline::{build_view, filter_records, sort_records};
pub use selection::{Series, SortMode, ViewSelection};
