use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

use member_registry::{
    app_state::{AppState, MemberStoreType},
    configure_postgresql,
    services::{
        data_stores::{HashmapMemberStore, PostgresMemberStore},
        MembershipService,
    },
    utils::{
        constants::{APP_ADDRESS, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let member_store: MemberStoreType = match DATABASE_URL.as_ref() {
        Some(url) => {
            let pg_pool = configure_postgresql(url).await?;
            tracing::info!("using PostgreSQL member store");
            Arc::new(RwLock::new(PostgresMemberStore::new(pg_pool)))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, members are kept in memory only"
            );
            Arc::new(RwLock::new(HashmapMemberStore::default()))
        }
    };

    let app_state = AppState::new(MembershipService::new(member_store));

    let app = Application::build(app_state, APP_ADDRESS.as_str()).await?;
    app.run().await?;

    Ok(())
}
