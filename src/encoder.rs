use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;

use crate::error::{EncodeError, Result};
use crate::service_account;

/// Read the whole file in one scoped open. The handle is dropped before returning.
fn read_raw(path: &Path) -> Result<Vec<u8>> {
    let io_err = |source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(io_err)?;
    Ok(raw)
}

/// Validate the service-account file at `path` and return the standard base64
/// encoding (padded, unwrapped) of its exact bytes.
pub fn encode_service_account(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EncodeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = read_raw(path)?;
    log::debug!("Read {} bytes from {}", raw.len(), path.display());

    let doc: Value =
        serde_json::from_slice(&raw).map_err(|e| EncodeError::InvalidFormat(e.to_string()))?;

    let summary = service_account::validate(&doc)?;
    log::info!(
        "Validated service account (project: {}, client: {})",
        summary.project_id.unwrap_or("<non-string>"),
        summary.client_email.unwrap_or("<non-string>")
    );

    // Encode the bytes as read, not a re-serialization of `doc`.
    let encoded = general_purpose::STANDARD.encode(&raw);
    log::debug!("Encoded length: {}", encoded.len());
    Ok(encoded)
}
