// Mon Oct 19 2026 - Alex

use crate::orchestration::aggregation::AggregateResult;
use crate::store::EntityRecord;
use crate::utils::format_duration;
use colored::*;
use std::time::Duration;

pub struct DisplayRenderer {
    use_color: bool,
    preview_values: usize,
    rule_width: usize,
}

impl DisplayRenderer {
    pub fn new() -> Self {
        Self {
            use_color: true,
            preview_values: 5,
            rule_width: 50,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_preview_values(mut self, count: usize) -> Self {
        self.preview_values = count;
        self
    }

    fn format_values(values: &[f64]) -> String {
        values
            .iter()
            .map(|v| format!("{:.2}", v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Id, leading samples and median for one entity, followed by a rule.
    pub fn render_preview(&self, record: &EntityRecord) -> String {
        let head = Self::format_values(record.head(self.preview_values));
        let median = format!("{:.2}", record.median());
        let rule = "-".repeat(self.rule_width);

        if self.use_color {
            format!(
                "{}: {}...\n{} {}\n{}",
                record.id().cyan(),
                head,
                "Median:".yellow(),
                median.green(),
                rule.dimmed()
            )
        } else {
            format!("{}: {}...\nMedian: {}\n{}", record.id(), head, median, rule)
        }
    }

    pub fn render_full_series(&self, record: &EntityRecord) -> String {
        let values = Self::format_values(record.series());
        if self.use_color {
            format!("{}: {}", record.id().cyan().bold(), values)
        } else {
            format!("{}: {}", record.id(), values)
        }
    }

    pub fn render_results(&self, result: &AggregateResult) -> String {
        result
            .labeled()
            .iter()
            .map(|(label, value)| {
                let line = format!("{} global temperature:", label);
                let value = format!("{:.2}", value);
                if self.use_color {
                    format!("{} {}", line.cyan(), value.green().bold())
                } else {
                    format!("{} {}", line, value)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_elapsed(&self, elapsed: Duration) -> String {
        let value = format_duration(elapsed);
        if self.use_color {
            format!("{} {}", "Elapsed time:".cyan(), value.yellow())
        } else {
            format!("Elapsed time: {}", value)
        }
    }
}

impl Default for DisplayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EntityRecord {
        EntityRecord::new("entity-1".to_string(), vec![1.0, 2.5, -3.25, 4.0, 5.0, 6.0, 7.0]).unwrap()
    }

    #[test]
    fn test_preview_plain() {
        let renderer = DisplayRenderer::new().with_color(false);
        let rendered = renderer.render_preview(&record());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "entity-1: 1.00, 2.50, -3.25, 4.00, 5.00...");
        assert_eq!(lines[1], "Median: 4.00");
        assert_eq!(lines[2], "-".repeat(50));
    }

    #[test]
    fn test_preview_value_count() {
        let renderer = DisplayRenderer::new().with_color(false).with_preview_values(2);
        let rendered = renderer.render_preview(&record());
        assert!(rendered.starts_with("entity-1: 1.00, 2.50..."));
    }

    #[test]
    fn test_full_series_plain() {
        let renderer = DisplayRenderer::new().with_color(false);
        assert_eq!(
            renderer.render_full_series(&record()),
            "entity-1: 1.00, 2.50, -3.25, 4.00, 5.00, 6.00, 7.00"
        );
    }

    #[test]
    fn test_results_plain() {
        let renderer = DisplayRenderer::new().with_color(false);
        let result = AggregateResult { min: 1.0, max: 5.0, average: 3.0 };
        assert_eq!(
            renderer.render_results(&result),
            "Minimal global temperature: 1.00\nMaximal global temperature: 5.00\nAverage global temperature: 3.00"
        );
    }

    #[test]
    fn test_elapsed_plain() {
        let renderer = DisplayRenderer::new().with_color(false);
        assert!(renderer.render_elapsed(Duration::from_millis(250)).starts_with("Elapsed time: "));
    }
}
