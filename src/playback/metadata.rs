use anyhow::Result;
use lofty::AudioFile;
use std::path::Path;
use std::time::Duration;

/// Length of the track from its container headers. Zero when the container
/// does not record one.
pub fn read_duration(path: &Path) -> Result<Duration> {
    let tagged = lofty::read_from_path(path)?;
    Ok(tagged.properties().duration())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_duration(&dir.path().join("nope.mp3")).is_err());
    }
}
