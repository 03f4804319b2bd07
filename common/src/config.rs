use std::path::PathBuf;

pub struct Config {
    /// Location of the SQLite survey database.
    ///
    /// Created on first use if the file does not exist.
    pub db_path: PathBuf,

    /// Suppresses decorative output (headers, separators) when non-zero.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("skymap.db"),
            quiet: 0,
        }
    }
}
