use integrations_fine_tune_action::config::{EnvInputs, InputSource};
use integrations_fine_tune_action::observability::{
    add_mask, set_failed, LoggingConfig, WorkflowCommand,
};
use integrations_fine_tune_action::{Action, ActionResult, RunOutcome};
use secrecy::ExposeSecret;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let source = EnvInputs;

    let runner_debug = source.var("RUNNER_DEBUG").as_deref() == Some("1");
    if let Err(e) = LoggingConfig::for_runner(runner_debug).init() {
        eprintln!("failed to initialise logging: {}", e);
    }

    match run(&source).await {
        Ok(outcome) => {
            info!(
                training_file = %outcome.training_file_id,
                validation_file = ?outcome.validation_file_id,
                fine_tune = %outcome.fine_tune_id,
                artifact = %outcome.artifact_id,
                "fine-tune started"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "action failed");
            set_failed(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(source: &dyn InputSource) -> ActionResult<RunOutcome> {
    let action = Action::from_source(source)?;
    add_mask(action.inputs().gh_token.expose_secret());
    add_mask(action.inputs().openai_api_key.expose_secret());

    WorkflowCommand::Group("Fine-tune".to_string()).issue();
    let result = action.run().await;
    WorkflowCommand::EndGroup.issue();
    result
}
