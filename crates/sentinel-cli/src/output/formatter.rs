use colored::*;
use sentinel_core::{Category, Finding};

pub fn print_finding(finding: &Finding) {
    let category_colored = match finding.category {
        Category::Blocking => "BLOCKING".red().bold(),
        Category::Tracking => "TRACKING".yellow(),
    };

    println!(
        "[{}] [{}] {}:{}  {}",
        category_colored,
        finding.word.cyan(),
        finding.path.display(),
        finding.line_number,
        finding.text
    );
}
