//! Centralized constants for PackPal checklist logic.
//!
//! Trip defaults, report layout strings and the default output location live
//! here so the stages agree on them without passing them around.

// Trip length --------------------------------------------------------------
pub const DEFAULT_TRIP_DAYS: u32 = 3;
pub const MIN_TRIP_DAYS: u32 = 1;
pub const MAX_TRIP_DAYS: u32 = 60;

// Token glyphs -------------------------------------------------------------
pub(crate) const STOPWATCH_GLYPH: char = '\u{23F1}';
pub(crate) const ALARM_CLOCK_GLYPH: char = '\u{23F0}';

// Catalog ------------------------------------------------------------------
pub const MISC_CATEGORY: &str = "Misc";

// Report layout ------------------------------------------------------------
pub const REPORT_TITLE: &str = "PackPal SIMPLE — Packing List";
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
pub(crate) const SEPARATOR_WIDTH: usize = 40;
pub(crate) const BULLET: &str = "•";
pub(crate) const NO_ACTIVITIES_LABEL: &str = "general";
pub(crate) const NO_CLIMATE_LABEL: &str = "unspecified";

// Output -------------------------------------------------------------------
pub const DEFAULT_OUTPUT_FILE: &str = "packpal_output.txt";
