use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const PROMPT_HINT: &str =
    "Enter your trip (emoji/words). Example:  '🏖️ 📸 3d'   or   'hiking ❄️ 4d'";
const PROMPT_MARKER: &str = "> ";

/// Ask for a trip description once and return the trimmed line.
///
/// End of input yields an empty description, which parses as a general trip.
pub fn read_description(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    writeln!(out, "{PROMPT_HINT}").context("failed to write prompt")?;
    write!(out, "{PROMPT_MARKER}").context("failed to write prompt")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read trip description from stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_trimmed_line() {
        let mut input = Cursor::new("  city ☔ 2d  \nignored\n");
        let mut out = Vec::new();
        let raw = read_description(&mut input, &mut out).unwrap();
        assert_eq!(raw, "city ☔ 2d");
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Enter your trip (emoji/words)."));
        assert!(shown.ends_with("\n> "));
    }

    #[test]
    fn end_of_input_is_empty_description() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(read_description(&mut input, &mut out).unwrap(), "");
    }
}
