//! Analytics commands

use autosupport_console::output::OutputFormat;
use autosupport_console::render;
use autosupport_console::Client;

use super::CommandResult;
use crate::AnalyticsCommands;

pub async fn handle(action: AnalyticsCommands, client: &Client, format: OutputFormat) -> CommandResult {
    let analytics = client.analytics();
    match action {
        AnalyticsCommands::Trends { days } => {
            let report = analytics.trends(days).await?;
            format.print(&report, render::trend_report);
        }
        AnalyticsCommands::TopIssues { limit } => {
            let issues = analytics.top_issues(limit).await?;
            format.print(&issues, render::top_issues);
        }
        AnalyticsCommands::Performance => {
            let metrics = analytics.performance().await?;
            format.print(&metrics, render::performance);
        }
    }
    Ok(())
}
