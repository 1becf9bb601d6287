use anyhow::Result;
use serde::Deserialize;

/// Models the agent can be asked to run, first one is the default
pub const MODELS: [&str; 3] = [
    "gemini-2.0-flash-exp",
    "gemini-2.5-flash-native-audio-preview-09-2025",
    "gemini-2.5-flash-lite-preview-06-17",
];

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub credentials: CredentialsConfig,
    pub transport: TransportConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsConfig {
    /// Base URL of the credential endpoint
    pub endpoint: String,
    pub room: String,
    pub model: String,
    /// Fixed participant identity; generated per call when unset
    pub identity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransportConfig {
    pub nats_url: String,
    pub subject_prefix: String,
}

impl Config {
    /// Load `path` (any format the `config` crate knows, extension optional)
    /// over built-in defaults, then apply `VOICE_CONSOLE__SECTION__KEY`
    /// environment overrides. A missing file is not an error.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "voice-console")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 5173_i64)?
            .set_default("credentials.endpoint", "http://localhost:5001")?
            .set_default("credentials.room", "gemini-test-room")?
            .set_default("credentials.model", MODELS[0])?
            .set_default("transport.nats_url", "nats://localhost:4222")?
            .set_default("transport.subject_prefix", "voice")?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("VOICE_CONSOLE").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
