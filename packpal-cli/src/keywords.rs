use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use packpal_core::{Catalog, DEFAULT_TRIP_DAYS, MAX_TRIP_DAYS, MIN_TRIP_DAYS, Vocabulary};

fn write_section<'a>(
    out: &mut impl Write,
    title: &str,
    keywords: impl Iterator<Item = &'a str>,
    vocabulary: &Vocabulary,
) -> Result<()> {
    writeln!(out, "{}", title.bright_cyan().bold())?;
    for keyword in keywords {
        let symbols: Vec<&str> = vocabulary.symbols_for(keyword).collect();
        writeln!(out, "  {keyword:16} {}", symbols.join(" "))?;
    }
    Ok(())
}

/// Print every keyword the catalog knows, with the symbols that resolve to it.
pub fn write_keywords(
    out: &mut impl Write,
    catalog: &Catalog,
    vocabulary: &Vocabulary,
) -> Result<()> {
    write_section(out, "Activities:", catalog.activity_keywords(), vocabulary)?;
    writeln!(out)?;
    write_section(out, "Climates:", catalog.climate_keywords(), vocabulary)?;
    writeln!(out)?;
    writeln!(out, "{}", "Days:".bright_cyan().bold())?;
    writeln!(
        out,
        "  3, 3d, ⏱️3 or ⏰3 (clamped to {MIN_TRIP_DAYS}-{MAX_TRIP_DAYS}, default {DEFAULT_TRIP_DAYS})"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_keywords_with_symbols() {
        let mut out = Vec::new();
        write_keywords(
            &mut out,
            Catalog::default_catalog(),
            Vocabulary::default_vocabulary(),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let beach = text
            .lines()
            .find(|line| line.trim_start().starts_with("beach"))
            .expect("beach line");
        assert!(beach.contains("🏖️"));
        assert!(beach.contains("🏝️"));
        assert!(text.contains("amusement_park"));
        assert!(text.contains("storm"));
        assert!(text.contains("default 3"));
    }

    #[test]
    fn keywords_without_symbols_still_listed() {
        let catalog = Catalog::from_json(r#"{ "activities": { "kayak": {} } }"#).unwrap();
        let mut out = Vec::new();
        write_keywords(&mut out, &catalog, &Vocabulary::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("kayak"));
    }
}
