use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::dataset::loader::{load_dataset_with, LoadPolicy};
use crate::dataset::FoodDataset;
use crate::error::Result;

static SHARED_DATASET: OnceLock<FoodDataset> = OnceLock::new();

/// Process-wide dataset, loaded on first use and reused afterwards.
///
/// Only the first successful load counts: later calls return that dataset and
/// ignore `path` and `policy`. A failed load is not cached.
pub fn shared_dataset<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<&'static FoodDataset> {
    if let Some(dataset) = SHARED_DATASET.get() {
        debug!("reusing cached dataset");
        return Ok(dataset);
    }

    let dataset = load_dataset_with(path, policy)?;
    // A concurrent first load may win the race; either copy is equivalent.
    Ok(SHARED_DATASET.get_or_init(|| dataset))
}

/// Whether the process-wide dataset has been loaded.
pub fn is_loaded() -> bool {
    SHARED_DATASET.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_once_then_reuse() {
        let missing = tempfile::tempdir().unwrap().path().join("none.csv");
        if !is_loaded() {
            // Failures are not cached
            assert!(shared_dataset(&missing, LoadPolicy::Strict).is_err());
            assert!(!is_loaded());
        }

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Alimento,Grupo,Kcal\nRice,Grains,130\n").unwrap();

        let first = shared_dataset(file.path(), LoadPolicy::Strict).unwrap();
        let second = shared_dataset(&missing, LoadPolicy::Strict).unwrap();

        assert!(is_loaded());
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), 1);
    }
}
