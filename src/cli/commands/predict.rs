use anyhow::{Context, Result};
use common::PredictionFormController;
use std::io::Write;
use tracing::{debug, info, trace, warn};

use crate::cli::FieldArgs;
use crate::client::HttpPredictionClient;
use crate::config::Settings;
use crate::render::render_view;

/// Fill the form from `fields`, submit it once and write the rendered page
/// to `out`. Returns whether the prediction succeeded.
pub async fn predict<W: Write>(settings: &Settings, fields: &FieldArgs, out: &mut W) -> Result<bool> {
    trace!("Entering predict command");
    debug!("Prediction endpoint: {}", settings.endpoint);

    let client = HttpPredictionClient::new(settings).context("Failed to build HTTP client")?;

    let mut controller = PredictionFormController::new();
    for (key, value) in fields.updates() {
        controller.update_field(key, value);
    }

    info!("Submitting toy attributes to {}", client.endpoint());
    controller.submit(&client).await;

    let view = controller.view();
    out.write_all(render_view(&view).as_bytes())
        .context("Failed to write prediction output")?;
    out.flush()?;

    let succeeded = view.result_panel.is_some();
    if succeeded {
        info!("Prediction completed");
    } else {
        warn!("Prediction did not succeed");
    }
    Ok(succeeded)
}
