use serde_json::Value;

use crate::error::SchemaError;

/// File looked up when no path is given on the command line.
pub const DEFAULT_KEY_FILE: &str = "serviceAccountKey.json";

/// Environment variable the encoded credential is meant to be stored in.
pub const ENV_VAR_NAME: &str = "FIREBASE_SERVICE_ACCOUNT_KEY_B64";

pub const EXPECTED_TYPE: &str = "service_account";

/// Top-level keys every credential must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["type", "project_id", "private_key", "client_email"];

/// Identifying fields of a validated credential, used for diagnostics only.
#[derive(Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ServiceAccountSummary<'a> {
    pub project_id: Option<&'a str>,
    pub client_email: Option<&'a str>,
}

impl<'a> ServiceAccountSummary<'a> {
    /// Each field is read on its own; a non-string value leaves only that field empty.
    pub fn from_doc(doc: &'a Value) -> Self {
        ServiceAccountSummary {
            project_id: doc["project_id"].as_str(),
            client_email: doc["client_email"].as_str(),
        }
    }
}

/// Required fields absent from `doc`. A non-object document lacks all of them.
pub fn missing_fields(doc: &Value) -> Vec<&'static str> {
    match doc.as_object() {
        Some(map) => REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !map.contains_key(*field))
            .collect(),
        None => REQUIRED_FIELDS.to_vec(),
    }
}

fn describe_type(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn validate(doc: &Value) -> Result<ServiceAccountSummary<'_>, SchemaError> {
    let missing = missing_fields(doc);
    if !missing.is_empty() {
        return Err(SchemaError::MissingFields(missing));
    }

    let kind = &doc["type"];
    if kind.as_str() != Some(EXPECTED_TYPE) {
        return Err(SchemaError::InvalidType(describe_type(kind)));
    }

    Ok(ServiceAccountSummary::from_doc(doc))
}
