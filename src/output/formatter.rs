//! Output formatters for load results
//!
//! Provides table, JSON, and CSV renderings of a finished run.

use crate::models::LoadResult;

/// Renders an ordered result list to text.
///
/// Pure presentation; invoked only after every case has succeeded.
pub trait Reporter {
    fn format(&self, results: &[LoadResult]) -> String;
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    JsonPretty,
    Csv,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Default result formatter
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Reporter for ReportFormatter {
    fn format(&self, results: &[LoadResult]) -> String {
        match self.format {
            OutputFormat::Table => format_table(results),
            OutputFormat::Json => serde_json::to_string(results).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(results).unwrap_or_default(),
            OutputFormat::Csv => format_csv(results),
        }
    }
}

fn format_table(results: &[LoadResult]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("Case".len());

    let mut output = String::new();
    let rule = format!(
        "├─{:─<name_width$}─┼────────────┼─────────────┼────────────┤\n",
        ""
    );

    output.push_str(&format!(
        "┌─{:─<name_width$}─┬────────────┬─────────────┬────────────┐\n",
        ""
    ));
    output.push_str(&format!(
        "│ {:name_width$} │ Iterations │ Elapsed(ms) │   Iter/sec │\n",
        "Case"
    ));
    output.push_str(&rule);

    for result in results {
        output.push_str(&format!(
            "│ {:name_width$} │ {:>10} │ {:>11} │ {:>10.1} │\n",
            result.name,
            result.iterations,
            result.elapsed_ms,
            result.throughput()
        ));
    }

    output.push_str(&rule);
    let total_iterations: u64 = results.iter().map(|r| r.iterations).sum();
    let total_elapsed: u64 = results.iter().map(|r| r.elapsed_ms).sum();
    output.push_str(&format!(
        "│ {:name_width$} │ {:>10} │ {:>11} │ {:>10} │\n",
        "Total",
        total_iterations,
        total_elapsed,
        results.len()
    ));
    output.push_str(&format!(
        "└─{:─<name_width$}─┴────────────┴─────────────┴────────────┘\n",
        ""
    ));

    output
}

fn format_csv(results: &[LoadResult]) -> String {
    let mut output = String::from("case,iterations,elapsed_ms\n");
    for result in results {
        output.push_str(&format!(
            "\"{}\",{},{}\n",
            result.name.replace('"', "\"\""),
            result.iterations,
            result.elapsed_ms
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_results() -> Vec<LoadResult> {
        vec![
            LoadResult::new("cases::login", 10, 1000),
            LoadResult::new("cases::checkout", 100, 4000),
        ]
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_table_lists_cases_in_order() {
        let output = ReportFormatter::new(OutputFormat::Table).format(&demo_results());
        let login = output.find("cases::login").unwrap();
        let checkout = output.find("cases::checkout").unwrap();
        assert!(login < checkout);
        assert!(output.contains("Iterations"));
    }

    #[test]
    fn test_json_round_trips() {
        let results = demo_results();
        let output = ReportFormatter::new(OutputFormat::Json).format(&results);
        let back: Vec<LoadResult> = serde_json::from_str(&output).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn test_csv_has_header_row() {
        let output = ReportFormatter::new(OutputFormat::Csv).format(&demo_results());
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("case,iterations,elapsed_ms"));
        assert_eq!(lines.next(), Some("\"cases::login\",10,1000"));
    }

    #[test]
    fn test_empty_results_still_render() {
        let output = ReportFormatter::default().format(&[]);
        assert!(output.contains("Case"));
    }
}
