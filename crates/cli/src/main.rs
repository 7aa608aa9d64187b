use std::io::{self, BufWriter};

use fp16_qdefs_cli::commands::generate;
use fp16_qdefs_cli::telemetry;

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();

    let stdout = io::stdout();
    let report = generate::run(BufWriter::new(stdout.lock()))?;

    tracing::info!(
        formats = report.summary.formats,
        overflowed = report.summary.overflowed,
        bytes = report.bytes,
        digest = %report.digest,
        "done"
    );
    Ok(())
}
