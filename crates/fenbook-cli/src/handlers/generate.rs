use std::path::PathBuf;

use serde::Serialize;

use fenbook_client::{RenderClient, SubmissionController, SubmissionOutcome};
use fenbook_core::AppConfig;
use fenbook_domain::{build_payload, parse_import, ColorValue, DiagramCollection, RenderOptions};

use crate::cli::GenerateArgs;
use crate::output;

#[derive(Serialize)]
struct GeneratedInfo {
    path: String,
    bytes: usize,
}

pub async fn handle(config: &AppConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", args.file, e))?;

    let mut collection = DiagramCollection::empty();
    collection.replace_all(parse_import(&text));

    let options = render_options(&args);
    let payload = match build_payload(&collection, &options) {
        Ok(payload) => payload,
        Err(err) => output::output_error(&err.to_string()),
    };
    tracing::debug!(diagrams = payload.fens.len(), "submitting generate request");

    let client = RenderClient::new(config.effective_site_url())?;
    let controller = SubmissionController::new(client);
    let output_path = PathBuf::from(
        args.output
            .as_deref()
            .unwrap_or(config.effective_default_output()),
    );

    match controller.submit(&payload, &output_path).await {
        SubmissionOutcome::Saved { path, bytes } => {
            output::output_success(GeneratedInfo {
                path: path.display().to_string(),
                bytes,
            });
            Ok(())
        }
        SubmissionOutcome::RejectedInFlight => {
            output::output_error("a submission is already in flight")
        }
        SubmissionOutcome::Failed(err) => output::output_error(&err.user_message()),
    }
}

fn render_options(args: &GenerateArgs) -> RenderOptions {
    let mut options = RenderOptions::default();
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    if let Some(per_page) = args.per_page {
        options.diagrams_per_page = per_page;
    }
    if let Some(padding) = args.padding {
        options.padding = padding;
    }
    if let Some(light) = &args.light {
        options.light_squares = ColorValue::raw(light);
    }
    if let Some(dark) = &args.dark {
        options.dark_squares = ColorValue::raw(dark);
    }
    if let Some(border) = &args.border {
        options.border_color = ColorValue::raw(border);
    }
    if let Some(inner) = &args.inner_border {
        options.inner_border_color = ColorValue::raw(inner);
    }
    if let Some(max) = args.single_column_max {
        options.single_column_max = max;
    }
    if let Some(max) = args.two_column_max {
        options.two_column_max = max;
    }
    options.show_turn_indicator = args.turn_indicator;
    options.show_page_numbers = args.page_numbers;
    options.show_coordinates = !args.no_coordinates;
    options
}
