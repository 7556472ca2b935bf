/// Aggregate service over the pluggable backends. The domain service traits
/// (`GenerationService`, `HistoryService`) are implemented on this struct in
/// their respective modules.
#[derive(Debug, Clone)]
pub struct Service<L, H> {
    pub llm_client: L,
    pub recipe_repository: H,
}

impl<L, H> Service<L, H> {
    pub fn new(llm_client: L, recipe_repository: H) -> Self {
        Self {
            llm_client,
            recipe_repository,
        }
    }
}
