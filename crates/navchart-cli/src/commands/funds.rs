//! 펀드 목록/카테고리 조회.

use anyhow::{Context, Result};
use navchart_core::{FundConfig, FundRoster};

use super::{truncate, OutputFormat};

/// 펀드 목록을 출력 문자열로 만듭니다.
///
/// `category`가 주어지면 해당 카테고리의 펀드만 포함합니다.
pub fn list_funds(
    roster: &FundRoster,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let funds: Vec<&FundConfig> = match category {
        Some(category) => roster.in_category(category).collect(),
        None => roster.funds().iter().collect(),
    };

    if let Some(category) = category {
        if funds.is_empty() {
            anyhow::bail!("Unknown category: {}", category);
        }
    }

    match format {
        OutputFormat::Table => Ok(format_table(&funds)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&funds).context("Failed to serialize to JSON")
        }
    }
}

/// 카테고리 목록을 출력 문자열로 만듭니다.
pub fn list_categories(roster: &FundRoster, format: OutputFormat) -> Result<String> {
    let categories = roster.categories();

    match format {
        OutputFormat::Table => {
            let mut output = String::new();
            for category in &categories {
                let count = roster.in_category(category).count();
                output.push_str(&format!("{:<30} {:>3} funds\n", category, count));
            }
            output.push_str(&format!("\nTotal: {} categories", categories.len()));
            Ok(output)
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(&categories).context("Failed to serialize to JSON")
        }
    }
}

fn format_table(funds: &[&FundConfig]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<10} {:<50} {:<20}\n", "CODE", "NAME", "CATEGORY"));
    output.push_str(&"-".repeat(82));
    output.push('\n');

    for fund in funds {
        output.push_str(&format!(
            "{:<10} {:<50} {:<20}\n",
            fund.code,
            truncate(&fund.name, 50),
            fund.category
        ));
    }

    output.push('\n');
    output.push_str(&format!("Total: {} funds", funds.len()));
    output
}
