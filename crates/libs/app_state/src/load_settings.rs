use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;

/// Loads settings from `config/settings.yaml`, overlaid with `APP__*` environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv to get it to overwrite the settings from env.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;
    load_settings_from_path(&config_path, true)
}

/// Loads settings from the given yaml file. When `use_env` is set, `APP__SECTION__KEY`
/// environment variables take precedence over values from the file.
pub fn load_settings_from_path(path: &Path, use_env: bool) -> Result<AppSettings> {
    let mut builder = config::Config::builder().add_source(config::File::from(path));
    if use_env {
        builder = builder.add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    }

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
