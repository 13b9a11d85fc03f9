//! Plain-text checklist rendering.
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

use crate::constants::{
    BULLET, NO_ACTIVITIES_LABEL, NO_CLIMATE_LABEL, REPORT_TITLE, SEPARATOR_WIDTH,
    TIMESTAMP_FORMAT,
};
use crate::scale::ScaledCatalog;
use crate::trip::TripRequest;

fn keyword_list(keywords: &BTreeSet<String>, fallback: &str) -> String {
    if keywords.is_empty() {
        fallback.to_string()
    } else {
        keywords
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Render the checklist report.
///
/// Header lines come first, then one section per category in name order.
/// Lines are joined with `\n` and the result has no trailing newline.
#[must_use]
pub fn render_report(
    request: &TripRequest,
    packed: &ScaledCatalog,
    generated_at: NaiveDateTime,
) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!("Generated: {}", generated_at.format(TIMESTAMP_FORMAT)),
        format!("Trip length: {} day(s)", request.days),
        format!(
            "Activities: {}",
            keyword_list(&request.activities, NO_ACTIVITIES_LABEL)
        ),
        format!(
            "Climate: {}",
            keyword_list(&request.climates, NO_CLIMATE_LABEL)
        ),
        "-".repeat(SEPARATOR_WIDTH),
    ];

    // BTreeMap iteration is already sorted by category name.
    for (category, items) in &packed.categories {
        lines.push(String::new());
        lines.push(format!("[{category}]"));
        lines.extend(items.iter().map(|item| format!("{BULLET} {item}")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::PackedItem;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .and_then(|d| d.and_hms_opt(9, 5, 59))
            .unwrap()
    }

    fn item(name: &str, quantity: Option<u32>) -> PackedItem {
        PackedItem {
            name: name.to_string(),
            quantity,
            optional: false,
        }
    }

    #[test]
    fn renders_header_and_sorted_sections() {
        let request = TripRequest {
            activities: ["photo", "beach"].iter().map(|s| (*s).to_string()).collect(),
            climates: ["cold"].iter().map(|s| (*s).to_string()).collect(),
            days: 2,
        };
        let mut packed = ScaledCatalog::default();
        packed
            .categories
            .insert("Misc".to_string(), vec![item("Cash", None)]);
        packed.categories.insert(
            "Clothing".to_string(),
            vec![item("Socks", Some(2)), item("Sleepwear", None)],
        );

        let report = render_report(&request, &packed, timestamp());
        let expected = [
            "PackPal SIMPLE — Packing List",
            "Generated: 2026-03-14 09:05",
            "Trip length: 2 day(s)",
            "Activities: beach, photo",
            "Climate: cold",
            "----------------------------------------",
            "",
            "[Clothing]",
            "• Socks x2",
            "• Sleepwear",
            "",
            "[Misc]",
            "• Cash",
        ]
        .join("\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn empty_keyword_sets_use_fallback_labels() {
        let report = render_report(&TripRequest::default(), &ScaledCatalog::default(), timestamp());
        assert!(report.contains("\nActivities: general\n"));
        assert!(report.contains("\nClimate: unspecified\n"));
        assert!(report.ends_with(&"-".repeat(40)));
        assert!(!report.ends_with('\n'));
    }
}
