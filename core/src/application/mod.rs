use crate::{
    domain::{
        common::{IdechefConfig, services::Service},
        locale::services::LocaleStore,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        history::PostgresRecipeRepository,
        llm::openai_client::OpenAiLlmClient,
        locale::FileLocalePersistence,
    },
};

pub type IdechefService = Service<OpenAiLlmClient, PostgresRecipeRepository>;
pub type AppLocaleStore = LocaleStore<FileLocalePersistence>;

/// Wires the concrete backends into the aggregate service.
pub async fn create_service(config: IdechefConfig) -> Result<IdechefService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let recipe_repository = PostgresRecipeRepository::new(postgres.get_db());
    let llm_client = OpenAiLlmClient::new(config.llm.clone());

    Ok(Service::new(llm_client, recipe_repository))
}

pub async fn create_locale_store(config: &IdechefConfig) -> Result<AppLocaleStore, anyhow::Error> {
    let persistence = FileLocalePersistence::new(config.locale.storage_path.clone());
    let store = LocaleStore::init(persistence).await?;
    Ok(store)
}
