use log::{debug, info};

use crate::config::DatabaseSettings;
use crate::database::{self, DbConn, DbPool, Match, Player, PlayerId, Standing};
use crate::errors::Result;
use crate::pairing::{self, Pairings};

/// Entry point for every tournament operation.
///
/// Holds a pool handle; each call checks out its own connection and returns
/// it when the call ends, whether it succeeded or not.
#[derive(Clone)]
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open the database file from `settings`, creating missing tables.
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = database::create_pool(settings)?;
        Self::with_schema(pool)
    }

    /// Private in-memory tournament, used by tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        let pool = database::create_memory_pool()?;
        Self::with_schema(pool)
    }

    fn with_schema(pool: DbPool) -> Result<Self> {
        let service = Self::new(pool);
        let mut conn = service.connection()?;
        database::setup::ensure_schema(&mut conn)?;
        Ok(service)
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }

    /// Drop and recreate both tables.
    pub fn reset(&self) -> Result<()> {
        let mut conn = self.connection()?;
        database::setup::reset_database(&mut conn)
    }

    /// Remove all match records. Win and match counters are kept.
    pub fn delete_matches(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let removed = database::matches::delete_all(&mut conn)?;
        info!("Deleted {} matches", removed);
        Ok(())
    }

    /// Remove all players together with their matches.
    pub fn delete_players(&self) -> Result<()> {
        let mut conn = self.connection()?;
        let removed = database::players::delete_all(&mut conn)?;
        info!("Deleted {} players", removed);
        Ok(())
    }

    pub fn count_players(&self) -> Result<i64> {
        let mut conn = self.connection()?;
        database::players::count(&mut conn)
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let mut conn = self.connection()?;
        let player = database::players::insert_player(&mut conn, name)?;
        info!("Registered player {} (id {})", player.name, player.id);
        Ok(player)
    }

    pub fn find_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let mut conn = self.connection()?;
        database::players::find_by_id(&mut conn, id)
    }

    /// Players ordered by wins, lowest first.
    pub fn player_standings(&self) -> Result<Vec<Standing>> {
        let mut conn = self.connection()?;
        let standings = database::standings::list_standings(&mut conn)?;
        debug!("Loaded standings for {} players", standings.len());
        Ok(standings)
    }

    /// Record that `winner` beat `loser`. Nothing is written unless the whole
    /// report succeeds.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<Match> {
        let mut conn = self.connection()?;
        let recorded = database::matches::record_result(&mut conn, winner, loser)?;
        info!("Recorded match {}: {} beat {}", recorded.id, winner, loser);
        Ok(recorded)
    }

    pub fn list_matches(&self) -> Result<Vec<Match>> {
        let mut conn = self.connection()?;
        database::matches::list_all(&mut conn)
    }

    pub fn count_matches(&self) -> Result<i64> {
        let mut conn = self.connection()?;
        database::matches::count(&mut conn)
    }

    /// Pairings for the next round, taken from adjacent standings entries.
    pub fn swiss_pairings(&self) -> Result<Pairings> {
        let standings = self.player_standings()?;
        let pairings = pairing::pair_adjacent(&standings);
        debug!("Generated {} pairings", pairings.len());
        Ok(pairings)
    }
}
