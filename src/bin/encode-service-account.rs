use std::io;
use std::path::PathBuf;

use sa_encoder::{encode_service_account, logger, report, service_account::DEFAULT_KEY_FILE};

fn main() -> anyhow::Result<()> {
    logger::setup_logger();

    // First argument is the path; anything after it is ignored.
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_FILE));

    let mut stdout = io::stdout().lock();
    report::lookup(&mut stdout, &path)?;

    match encode_service_account(&path) {
        Ok(encoded) => report::success(&mut stdout, &encoded)?,
        Err(e) => {
            log::debug!("Encoding failed: {e:?}");
            report::failure(&mut io::stderr().lock(), &e)?;
            std::process::exit(1);
        }
    }

    Ok(())
}
