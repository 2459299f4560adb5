use std::path::Path;

use console::style;
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};
use xlfind_search::{FoundItem, ScanReport};

#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    pub header: Option<String>,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "File")]
    label:  String,
    #[tabled(rename = "Found in")]
    origin: String,
    #[tabled(rename = "Saved as")]
    output: String,
}

impl From<&FoundItem> for Row {
    fn from(item: &FoundItem) -> Self {
        Self {
            label:  item.label.clone(),
            origin: item.archive_label.clone().unwrap_or_else(|| "folder".to_string()),
            output: item.arc_name.clone(),
        }
    }
}

fn table<T: Tabled, I: IntoIterator<Item = T>>(data: I, config: FormatConfig) -> Table {
    let mut table = Table::new(data);
    if let Some(header) = config.header {
        table.with(Panel::header(header));
    }
    table.with(Style::blank());
    table
}

pub fn items(items: &[FoundItem]) {
    let config = FormatConfig {
        header: Some(format!("{} matching file(s)", items.len())),
    };
    println!("{}", table(items.iter().map(Row::from), config));
}

pub fn report(report: &ScanReport) {
    for e in &report.archive_errors {
        eprintln!("{} {}", style("warning:").yellow().bold(), e);
    }
    for e in &report.skipped {
        eprintln!("{} {}", style("warning:").yellow().bold(), e);
    }
    if report.cancelled {
        eprintln!(
            "{} scan stopped early, results are incomplete",
            style("warning:").yellow().bold()
        );
    }
}

pub fn no_matches() {
    println!("{}", style("No matching Excel files found.").red());
}

pub fn written(path: &Path, count: usize) {
    println!(
        "{} {} file(s) to {}",
        style("Saved").green().bold(),
        count,
        path.display()
    );
}
