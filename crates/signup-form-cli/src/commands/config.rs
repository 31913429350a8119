use anyhow::{Context, Result};
use signup_form_validation::ValidatorSettings;

pub fn execute(settings: &ValidatorSettings) -> Result<()> {
    let rendered = toml::to_string_pretty(settings).context("Failed to render settings")?;
    print!("{}", rendered);
    Ok(())
}
