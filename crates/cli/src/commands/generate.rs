use std::io::Write;

use anyhow::Context;
use fp16_qdefs::digest::{DigestWriter, TableDigest};
use fp16_qdefs::render::TableSummary;
use fp16_qdefs::{Catalogue, TableRenderer};

/// Outcome of one generation pass.
#[derive(Debug, Clone, Copy)]
pub struct GenerateReport {
    pub summary: TableSummary,
    pub digest: TableDigest,
    pub bytes: u64,
}

/// Renders every Q-format block of the standard catalogue into `out`.
pub fn run<W: Write>(out: W) -> anyhow::Result<GenerateReport> {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);

    let mut writer = DigestWriter::new(out);
    let summary = renderer
        .render_all(&mut writer)
        .context("Failed to write constant table")?;
    writer.flush().context("Failed to flush constant table")?;

    let bytes = writer.bytes_written();
    let (_, digest) = writer.finish();

    Ok(GenerateReport {
        summary,
        digest,
        bytes,
    })
}
