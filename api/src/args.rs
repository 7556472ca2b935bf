use clap::Parser;
use idechef_core::domain::common::{DatabaseConfig, IdechefConfig, LlmConfig, LocaleConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "idechef-api", about = "AI recipe generation service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "idechef")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "idechef")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "idechef")]
    pub database_name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: String,

    #[arg(long, env = "LLM_GENERATION_MODEL", default_value = "gpt-4o-mini")]
    pub generation_model: String,

    #[arg(long, env = "LLM_VISION_MODEL", default_value = "gpt-4o")]
    pub vision_model: String,
}

#[derive(Parser, Debug, Clone)]
pub struct LocaleArgs {
    /// File holding the persisted locale preference tag.
    #[arg(long, env = "LOCALE_STORAGE_PATH", default_value = "idechef-locale")]
    pub locale_storage_path: String,
}

impl From<Args> for IdechefConfig {
    fn from(args: Args) -> Self {
        IdechefConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            llm: LlmConfig {
                openai_api_key: args.llm.openai_api_key,
                generation_model: args.llm.generation_model,
                vision_model: args.llm.vision_model,
            },
            locale: LocaleConfig {
                storage_path: args.locale.locale_storage_path,
            },
        }
    }
}
