//! Dashboard command

use autosupport_console::output::OutputFormat;
use autosupport_console::render;
use autosupport_console::views::DashboardPage;
use autosupport_console::Client;

use super::{show_page, CommandResult};

pub async fn handle(client: &Client, format: OutputFormat) -> CommandResult {
    let page = DashboardPage::new(client.clone());
    page.mount().await;

    let charts = page.charts();
    show_page(&page.state(), format, |state| render::dashboard(state, charts.as_ref()))
}
