use anyhow::{Context, Result};
use cityweather_core::{Units, WeatherReport};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Display driver: prepares the screen before the report is printed.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
}

/// Wipes the real terminal and homes the cursor.
#[derive(Debug, Default)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Leaves the screen alone (`--no-clear`, tests).
#[derive(Debug, Default)]
pub struct NoopScreen;

impl Screen for NoopScreen {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `<City>: \t<Description> \t(<Temp>° <C|F>)`
pub fn format_report(report: &WeatherReport, units: Units) -> String {
    format!(
        "{}: \t{} \t({}° {})",
        report.city,
        title_case(&report.description),
        report.temperature,
        units.symbol()
    )
}

/// Upper-case every letter that does not follow another letter, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_letter = false;

    for c in s.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }

    out
}

/// Clear the screen, then print the one-line summary.
pub fn present<W: Write>(
    screen: &mut dyn Screen,
    out: &mut W,
    report: &WeatherReport,
    units: Units,
) -> Result<()> {
    screen.clear().context("Failed to clear the terminal")?;

    writeln!(out, "{}", format_report(report, units))
        .and_then(|()| out.flush())
        .context("Failed to write the weather report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingScreen {
        clears: usize,
    }

    impl Screen for CountingScreen {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }
    }

    struct BrokenScreen;

    impl Screen for BrokenScreen {
        fn clear(&mut self) -> io::Result<()> {
            Err(io::Error::other("no terminal"))
        }
    }

    fn paris() -> WeatherReport {
        WeatherReport {
            city: "Paris".to_string(),
            description: "clear sky".to_string(),
            temperature: serde_json::Number::from_f64(18.5).unwrap(),
        }
    }

    #[test]
    fn formats_metric_line() {
        assert_eq!(format_report(&paris(), Units::Metric), "Paris: \tClear Sky \t(18.5° C)");
    }

    #[test]
    fn imperial_changes_only_the_letter() {
        assert_eq!(format_report(&paris(), Units::Imperial), "Paris: \tClear Sky \t(18.5° F)");
    }

    #[test]
    fn title_case_rules() {
        assert_eq!(title_case("clear sky"), "Clear Sky");
        assert_eq!(title_case("LIGHT RAIN"), "Light Rain");
        assert_eq!(title_case("o'neil drizzle"), "O'Neil Drizzle");
        assert_eq!(title_case("thunderstorm with heavy-rain"), "Thunderstorm With Heavy-Rain");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn present_clears_then_writes_one_line() {
        let mut screen = CountingScreen::default();
        let mut out = Vec::new();

        present(&mut screen, &mut out, &paris(), Units::Metric).unwrap();

        assert_eq!(screen.clears, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Paris: \tClear Sky \t(18.5° C)\n");
    }

    #[test]
    fn present_stops_when_screen_fails() {
        let mut out = Vec::new();

        let err = present(&mut BrokenScreen, &mut out, &paris(), Units::Metric).unwrap_err();

        assert!(err.to_string().contains("Failed to clear the terminal"));
        assert!(out.is_empty());
    }

    #[test]
    fn noop_screen_does_nothing() {
        let mut out = Vec::new();
        present(&mut NoopScreen, &mut out, &paris(), Units::Imperial).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("(18.5° F)\n"));
    }
}
