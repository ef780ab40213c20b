use std::io::{self, Write};
use std::path::Path;

use crate::service_account::ENV_VAR_NAME;

const SEPARATOR_WIDTH: usize = 80;

pub const KEY_HINT: &str =
    "Firebase Console > Project Settings > Service Accounts > Generate New Private Key";

pub fn lookup<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Looking for service account file: {}", path.display())
}

/// The `NAME=value` line to paste into an env file.
pub fn env_assignment(encoded: &str) -> String {
    format!("{ENV_VAR_NAME}={encoded}")
}

pub fn success<W: Write>(out: &mut W, encoded: &str) -> io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);

    writeln!(out, "\nSuccess! Copy the base64 string below:\n")?;
    writeln!(out, "{separator}")?;
    writeln!(out, "{encoded}")?;
    writeln!(out, "{separator}")?;
    writeln!(out, "\nAdd this to your .env.local file:")?;
    writeln!(out, "{}", env_assignment(encoded))?;
    writeln!(out, "\nKeep this value secret! Never commit it to git.")?;
    out.flush()
}

pub fn failure<W: Write>(err_out: &mut W, error: &dyn std::error::Error) -> io::Result<()> {
    writeln!(err_out, "\nError: {error}")?;
    writeln!(err_out, "\nTip: Download your service account key from:")?;
    writeln!(err_out, "   {KEY_HINT}")?;
    err_out.flush()
}
