#[cfg(feature = "lambda")]
use age_skill::domain::model::{SkillRequest, SkillResponse};
#[cfg(feature = "lambda")]
use age_skill::utils::logger;
#[cfg(feature = "lambda")]
use age_skill::{SkillRouter, SystemClock};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<SkillRequest>) -> Result<SkillResponse, Error> {
    tracing::info!("Handling skill request");

    let router = SkillRouter::new(SystemClock);
    let response = router.handle(&event.payload);

    tracing::info!(
        end_session = response.response.should_end_session,
        "Skill request handled"
    );
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
