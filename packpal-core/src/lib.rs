//! PackPal Checklist Engine
//!
//! Turns a free-form trip description into a categorized packing checklist.
//! This crate holds every stage (parsing, merging, scaling, rendering and the
//! save step) without terminal or platform concerns.

pub mod catalog;
pub mod constants;
pub mod directive;
pub mod merge;
pub mod report;
pub mod scale;
pub mod sink;
pub mod trip;
pub mod vocabulary;

use chrono::NaiveDateTime;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CategoryItems};
pub use constants::{DEFAULT_OUTPUT_FILE, DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS, MIN_TRIP_DAYS};
pub use directive::{Directive, DirectiveError, ItemTemplate};
pub use merge::MergedCatalog;
pub use report::render_report;
pub use scale::{PackedItem, ScaledCatalog};
pub use sink::{FileSink, ReportSink, SaveOutcome, SinkError, save_report};
pub use trip::{TripRequest, parse_trip};
pub use vocabulary::Vocabulary;

/// Parsed trip together with its scaled checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingPlan {
    pub request: TripRequest,
    pub packed: ScaledCatalog,
}

/// Everything produced by one run: the plan, its report and the save status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub plan: PackingPlan,
    pub report: String,
    pub saved: SaveOutcome,
}

/// Composes the checklist stages over a vocabulary, catalog and report sink.
pub struct PackingEngine<'a, S>
where
    S: ReportSink,
{
    vocabulary: &'a Vocabulary,
    catalog: &'a Catalog,
    sink: S,
}

impl<S> PackingEngine<'static, S>
where
    S: ReportSink,
{
    /// Create an engine over the embedded vocabulary and catalog.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_data(Vocabulary::default_vocabulary(), Catalog::default_catalog(), sink)
    }
}

impl<'a, S> PackingEngine<'a, S>
where
    S: ReportSink,
{
    pub const fn with_data(vocabulary: &'a Vocabulary, catalog: &'a Catalog, sink: S) -> Self {
        Self {
            vocabulary,
            catalog,
            sink,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        self.vocabulary
    }

    /// Parse, merge and scale without rendering or saving.
    #[must_use]
    pub fn plan(&self, raw: &str) -> PackingPlan {
        let request = TripRequest::parse(raw.trim(), self.vocabulary, self.catalog);
        let merged = MergedCatalog::build(self.catalog, &request.activities, &request.climates);
        let packed = ScaledCatalog::from_merged(&merged, request.days);
        PackingPlan { request, packed }
    }

    /// Run every stage and hand the report to the sink.
    ///
    /// A failed save is reported through [`Checklist::saved`]; the report is
    /// always returned.
    #[must_use]
    pub fn run(&self, raw: &str, generated_at: NaiveDateTime) -> Checklist {
        let plan = self.plan(raw);
        let report = render_report(&plan.request, &plan.packed, generated_at);
        let saved = save_report(&self.sink, &report);
        Checklist {
            plan,
            report,
            saved,
        }
    }
}
