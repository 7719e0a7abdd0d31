//! Reading model descriptions from disk

use std::{fs, io, path::Path};

use epbridge_shared::error::{AsBridgeError, BridgeError, Context};

/// A model description that could not be read.
#[derive(Debug)]
struct ReadError(io::Error);

impl AsBridgeError for ReadError {
    fn message(&self) -> String {
        format!("could not read the model description: {}", self.0)
    }

    #[expect(
        clippy::wildcard_enum_match_arm,
        reason = "only two error kinds come with advice"
    )]
    fn context(&self) -> Vec<Context> {
        match self.0.kind() {
            io::ErrorKind::NotFound => vec![Context::Help("check the path of the file".to_string())],
            io::ErrorKind::InvalidData => vec![Context::Note(
                "model descriptions must be UTF-8 text".to_string(),
            )],
            _ => vec![],
        }
    }
}

/// Reads a model description.
pub fn read(path: &Path) -> Result<String, BridgeError> {
    fs::read_to_string(path)
        .map_err(|error| BridgeError::from_error(&ReadError(error), Some(path.to_path_buf())))
}
