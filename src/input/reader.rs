use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads a whole sample file. Line breaks are ordinary token separators.
pub fn read_sample_file(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "sample file {} does not exist",
            path.display()
        )));
    }
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            InputError::Parse(format!("{} is not valid UTF-8 text", path.display()))
        } else {
            InputError::Io(e)
        }
    })?;
    if text.trim().is_empty() {
        return Err(InputError::MissingInput(format!(
            "sample file {} is empty",
            path.display()
        )));
    }
    Ok(text)
}
