//! ML commands

use autosupport_console::output::OutputFormat;
use autosupport_console::render;
use autosupport_console::Client;

use super::CommandResult;
use crate::MlCommands;

pub async fn handle(action: MlCommands, client: &Client, format: OutputFormat) -> CommandResult {
    let ml = client.ml();
    match action {
        MlCommands::Classify { text } => {
            let result = ml.classify(&text).await?;
            format.print(&result, render::classification);
        }
        MlCommands::Sentiment { text } => {
            let result = ml.sentiment(&text).await?;
            format.print(&result, render::sentiment);
        }
        MlCommands::Suggest { text, category } => {
            let result = ml.suggest_response(&text, category.as_deref()).await?;
            format.print(&result, render::suggestion);
        }
        MlCommands::Status => {
            let status = ml.model_status().await?;
            format.print(&status, render::model_status);
        }
        MlCommands::Reload => {
            let outcome = ml.reload_models().await?;
            println!("{}: {}", outcome.status, outcome.message);
        }
    }
    Ok(())
}
