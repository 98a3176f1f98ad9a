use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Deserialize;

use mrsort_sat::{model::MrSortModel, structures::dataset::Dataset};

/// A dataset file, either as written by `generate` or as marks and labels alone.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Generated {
        #[allow(dead_code)]
        model: MrSortModel,
        dataset: Dataset,
    },
    Plain(Dataset),
}

pub fn load_dataset(path: &Path) -> Result<Dataset, Box<dyn Error>> {
    let file = File::open(path).map_err(|e| format!("could not open {path:?}: {e}"))?;
    let dataset = match serde_json::from_reader(BufReader::new(file))? {
        DatasetFile::Generated { dataset, .. } => dataset,
        DatasetFile::Plain(dataset) => dataset,
    };
    Ok(dataset)
}

/// Writes some output to the given path, or to stdout.
pub fn with_output(
    path: Option<&Path>,
    write: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
) -> std::io::Result<()> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write(&mut writer)?;
            writer.flush()
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            lock.flush()
        }
    }
}
