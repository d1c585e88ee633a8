use rusqlite::{Connection, Result};

const MIGRATIONS: &str = include_str!("../migrations/0001_init.sql");

/// Opens (creating if missing) the database file, sets WAL plus a busy
/// timeout, and applies the idempotent migration batch. Every connection
/// runs the batch on open.
pub fn open_at(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    conn.execute_batch(MIGRATIONS)?;
    Ok(conn)
}

/// Fresh in-memory database with the full schema applied.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(MIGRATIONS)?;
    Ok(conn)
}
