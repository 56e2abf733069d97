use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Language catalog; builtin list when unset
    pub languages_file: Option<PathBuf>,
    // espeak-ng engine
    pub output_dir: PathBuf,
    pub espeak_bin: PathBuf,
    pub espeak_words_per_minute: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "7860".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            languages_file: env::var("TTS_LANGUAGES_FILE").ok().map(PathBuf::from),
            output_dir: env::var("TTS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir().join("interlink-tts")),
            espeak_bin: env::var("ESPEAK_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("espeak-ng")),
            espeak_words_per_minute: match env::var("ESPEAK_WORDS_PER_MINUTE") {
                Ok(wpm) => Some(wpm.parse()?),
                Err(_) => None,
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
