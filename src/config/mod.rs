use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "faleproxy")]
#[command(about = "Fetches a web page and serves a copy with every Yale swapped for Fale")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "3001")]
    pub port: u16,

    #[arg(long, default_value = "./public")]
    pub static_dir: String,

    #[arg(long, default_value = "Yale")]
    pub target_word: String,

    #[arg(long, default_value = "Fale")]
    pub substitute_word: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }

    fn target_word(&self) -> &str {
        &self.target_word
    }

    fn substitute_word(&self) -> &str {
        &self.substitute_word
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("host", &self.host)?;
        validation::validate_non_empty("static_dir", &self.static_dir)?;
        validation::validate_non_empty("target_word", &self.target_word)?;
        validation::validate_non_empty("substitute_word", &self.substitute_word)?;
        Ok(())
    }
}
