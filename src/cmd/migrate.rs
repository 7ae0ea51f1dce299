use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn apply() -> Result<()> {
    let state = AppState::new().await?;
    state.ensure_schema().await?;

    println!("Migrations applied successfully");
    Ok(())
}
