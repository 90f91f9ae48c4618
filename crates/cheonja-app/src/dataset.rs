//! The bundled character dataset.

use cheonja_core::{CharacterPool, DatasetError};

const BUNDLED_JSON: &str = include_str!("../assets/cheonjamun.json");

/// Loads the characters shipped with the app.
pub fn load_bundled() -> Result<CharacterPool, DatasetError> {
    let pool = CharacterPool::from_json_str(BUNDLED_JSON)?;
    log::info!(
        "loaded {} bundled characters in {} blocks",
        pool.len(),
        pool.blocks().len()
    );
    Ok(pool)
}
