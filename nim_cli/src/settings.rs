use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nim::BoardSettings;

/// Reads board settings from a JSON file.
///
/// Missing fields take their default values, e.g. `{"columns": 5}`.
pub fn load_settings(path: &Path) -> anyhow::Result<BoardSettings> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => anyhow::bail!("Could not open settings file '{}': {}", path.display(), err),
    };
    let settings = serde_json::from_reader(BufReader::new(file))?;
    Ok(settings)
}
