//! Config command handler.

use clap::Args;
use docqa_core::{config::AppConfig, AppResult};

/// Show the effective configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Also check that both services can be configured
    #[arg(long)]
    pub check: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing config command");

        let yaml = serde_yaml::to_string(&config.redacted())?;
        print!("{}", yaml);

        if self.check {
            config.validate()?;
            println!("Configuration OK");
        }

        Ok(())
    }
}
