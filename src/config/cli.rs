use clap::Parser;

/// Local harness for exercising the skill without the Alexa service: feed it
/// a captured request envelope or simulate a launch/intent directly.
#[derive(Debug, Clone, Parser)]
#[command(name = "age-skill")]
#[command(about = "Local harness for the age Alexa skill")]
pub struct CliConfig {
    #[arg(long, help = "Route a skill request envelope read from a JSON file")]
    pub request: Option<String>,

    #[arg(long, help = "Simulate an intent request with the given intent name")]
    pub intent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
