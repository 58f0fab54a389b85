use store::CodeflixConfig;

const BUNDLED_CONFIG: &str = include_str!("../../../codeflix.toml");

/// The configuration compiled into the app, or the defaults if it does not parse.
pub fn load_config() -> CodeflixConfig {
    match CodeflixConfig::from_toml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", CodeflixConfig::filename(), e);
            CodeflixConfig::default()
        }
    }
}
