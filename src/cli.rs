use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use common::{FieldKey, DEFAULT_ENDPOINT};
use std::process::ExitCode;

pub mod commands;

use commands::{list_fields, predict};

use crate::config::{Settings, DEFAULT_TIMEOUT_SECS};

#[derive(Parser)]
#[command(name = "toyprice")]
#[command(about = "Predict a toy's price from its attributes using a remote prediction service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit toy attributes and print the predicted price
    ///
    /// Every attribute is optional and sent as a string exactly as given,
    /// including empty values.
    ///
    /// Example:
    ///   toyprice predict --category "Action Figure" --brand Acme --age-group 5-7 \
    ///     --size 30 --weight 0.5 --material Plastic --condition New
    Predict {
        #[command(flatten)]
        fields: FieldArgs,

        /// Prediction endpoint URL
        #[arg(short, long, env = "TOYPRICE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(short, long, env = "TOYPRICE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
    /// List the form fields, their labels and input kinds
    Fields,
}

/// One flag per form field
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Toy category (e.g. "Action Figure")
    #[arg(long, env = "TOYPRICE_CATEGORY", default_value = "")]
    pub category: String,

    /// Brand name
    #[arg(long, env = "TOYPRICE_BRAND", default_value = "")]
    pub brand: String,

    /// Target age group (e.g. "5-7")
    #[arg(long, env = "TOYPRICE_AGE_GROUP", default_value = "")]
    pub age_group: String,

    /// Size in centimetres
    #[arg(long, env = "TOYPRICE_SIZE", default_value = "", allow_hyphen_values = true)]
    pub size: String,

    /// Weight in kilograms
    #[arg(long, env = "TOYPRICE_WEIGHT", default_value = "", allow_hyphen_values = true)]
    pub weight: String,

    /// Main material
    #[arg(long, env = "TOYPRICE_MATERIAL", default_value = "")]
    pub material: String,

    /// Condition (e.g. "New", "Used")
    #[arg(long, env = "TOYPRICE_CONDITION", default_value = "")]
    pub condition: String,
}

impl FieldArgs {
    /// Field updates in display order, ready to feed to the controller
    pub fn updates(&self) -> Vec<(FieldKey, String)> {
        FieldKey::ALL
            .into_iter()
            .map(|key| {
                let value = match key {
                    FieldKey::Category => &self.category,
                    FieldKey::Brand => &self.brand,
                    FieldKey::AgeGroup => &self.age_group,
                    FieldKey::Size => &self.size,
                    FieldKey::Weight => &self.weight,
                    FieldKey::Material => &self.material,
                    FieldKey::Condition => &self.condition,
                };
                (key, value.clone())
            })
            .collect()
    }
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Predict { fields, endpoint, timeout_secs } => {
                let settings = Settings::new(&endpoint, timeout_secs)?;
                let mut stdout = std::io::stdout();
                let succeeded = predict(&settings, &fields, &mut stdout).await?;
                Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
            }
            Commands::Fields => {
                let mut stdout = std::io::stdout();
                list_fields(&mut stdout)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
