use tokio::sync::watch;

use crate::domain::{
    common::entities::app_errors::CoreError,
    locale::{entities::Locale, ports::LocalePersistencePort},
};

/// Process-wide holder of the active locale. Initialized once from
/// persistence, re-persisted on every change. Interested parties subscribe
/// to changes instead of polling.
pub struct LocaleStore<P> {
    persistence: P,
    tx: watch::Sender<Locale>,
}

impl<P> LocaleStore<P>
where
    P: LocalePersistencePort,
{
    pub async fn init(persistence: P) -> Result<Self, CoreError> {
        let stored = persistence.load().await?;
        let locale = stored
            .as_deref()
            .and_then(Locale::from_tag)
            .unwrap_or_default();

        let (tx, _) = watch::channel(locale);
        Ok(Self { persistence, tx })
    }

    pub fn get(&self) -> Locale {
        *self.tx.borrow()
    }

    /// Persists first, then notifies subscribers. A persistence failure
    /// leaves the active locale unchanged.
    pub async fn set(&self, locale: Locale) -> Result<(), CoreError> {
        self.persistence.save(locale.as_tag().to_string()).await?;
        self.tx.send_replace(locale);
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::ports::MockLocalePersistencePort;

    #[tokio::test]
    async fn init_defaults_when_nothing_persisted() {
        let mut persistence = MockLocalePersistencePort::new();
        persistence
            .expect_load()
            .returning(|| Box::pin(async { Ok(None) }));

        let store = LocaleStore::init(persistence).await.unwrap();
        assert_eq!(store.get(), Locale::Id);
    }

    #[tokio::test]
    async fn init_defaults_when_persisted_value_is_invalid() {
        let mut persistence = MockLocalePersistencePort::new();
        persistence
            .expect_load()
            .returning(|| Box::pin(async { Ok(Some("klingon".to_string())) }));

        let store = LocaleStore::init(persistence).await.unwrap();
        assert_eq!(store.get(), Locale::Id);
    }

    #[tokio::test]
    async fn init_restores_persisted_locale() {
        let mut persistence = MockLocalePersistencePort::new();
        persistence
            .expect_load()
            .returning(|| Box::pin(async { Ok(Some("en".to_string())) }));

        let store = LocaleStore::init(persistence).await.unwrap();
        assert_eq!(store.get(), Locale::En);
    }

    #[tokio::test]
    async fn set_persists_and_notifies_subscribers() {
        let mut persistence = MockLocalePersistencePort::new();
        persistence
            .expect_load()
            .returning(|| Box::pin(async { Ok(None) }));
        persistence
            .expect_save()
            .withf(|tag| tag == "en")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let store = LocaleStore::init(persistence).await.unwrap();
        let mut rx = store.subscribe();

        store.set(Locale::En).await.unwrap();
        assert_eq!(store.get(), Locale::En);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Locale::En);
    }

    #[tokio::test]
    async fn set_keeps_current_locale_when_persistence_fails() {
        let mut persistence = MockLocalePersistencePort::new();
        persistence
            .expect_load()
            .returning(|| Box::pin(async { Ok(None) }));
        persistence
            .expect_save()
            .returning(|_| Box::pin(async { Err(CoreError::PersistenceFailed) }));

        let store = LocaleStore::init(persistence).await.unwrap();
        let err = store.set(Locale::En).await.unwrap_err();
        assert_eq!(err, CoreError::PersistenceFailed);
        assert_eq!(store.get(), Locale::Id);
    }
}
