use anyhow::Result;
use log::info;

use crate::config::leagues::get_reference_leagues;
use crate::database::{self, demo, setup, statistics};

/// Rebuilds the schema and seeds reference data
pub struct SetupService {
    database_path: String,
    with_demo: bool,
}

impl SetupService {
    pub fn new(database_path: String, with_demo: bool) -> Self {
        Self {
            database_path,
            with_demo,
        }
    }

    pub fn run(&self) -> Result<()> {
        info!("=== Setting up database {} ===", self.database_path);

        let pool = database::create_pool(&self.database_path)?;
        let mut conn = database::get_connection(&pool)?;

        setup::reset_database(&conn)?;
        let leagues = setup::seed_reference_leagues(&conn, &get_reference_leagues())?;
        info!("  → {} reference leagues", leagues);

        if self.with_demo {
            demo::insert_demo_dataset(&mut conn)?;
            let rows = statistics::count_for_season(&conn, demo::DEMO_SEASON)?;
            info!("  → {} statistics rows for season {}", rows, demo::DEMO_SEASON);
        }

        info!("=== Setup Complete ===");
        Ok(())
    }
}
