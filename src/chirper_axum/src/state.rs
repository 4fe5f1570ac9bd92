use chirper_adapters::SessionConfig;
use chirper_application::LifecycleLinks;

/// Shared handler state. Stores are cheap clones (`Arc` inside), so the
/// whole state is cloned per request without ceremony.
#[derive(Clone)]
pub struct AppState<C, T, E> {
    pub credential_store: C,
    pub token_store: T,
    pub email_client: E,
    pub links: LifecycleLinks,
    pub session: SessionConfig,
}

impl<C, T, E> AppState<C, T, E> {
    pub fn new(
        credential_store: C,
        token_store: T,
        email_client: E,
        links: LifecycleLinks,
        session: SessionConfig,
    ) -> Self {
        Self {
            credential_store,
            token_store,
            email_client,
            links,
            session,
        }
    }
}
