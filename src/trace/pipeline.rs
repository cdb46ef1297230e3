use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use crate::trace::error::TraceError;
use crate::trace::source::read_column;
use crate::trace::TraceDocument;
/// How the output document is laid out. Both are plain JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscodeSummary {
    pub time_samples: usize,
    pub voltage_samples: usize,
}
/// Encodes `document` to `writer` followed by a newline. Encoding errors
/// surface as `InvalidData`.
pub fn write_document<W: Write>(
    mut writer: W,
    document: &TraceDocument,
    style: OutputStyle,
) -> io::Result<()> {
    match style {
        OutputStyle::Pretty => serde_json::to_writer_pretty(&mut writer, document)?,
        OutputStyle::Compact => serde_json::to_writer(&mut writer, document)?,
    }
    writer.write_all(b"\n")
}
/// Merges the time and voltage columns into one JSON trace at `output_path`.
///
/// Both inputs are read completely before the output is created, so a bad
/// input never truncates an existing output file.
pub fn transcode(
    time_path: &Path,
    voltage_path: &Path,
    output_path: &Path,
    style: OutputStyle,
) -> Result<TranscodeSummary, TraceError> {
    let time = read_column(time_path)?;
    let voltage = read_column(voltage_path)?;
    if time.len() != voltage.len() {
        log::warn!(
            "time has {} values but voltage has {}; writing both as-is",
            time.len(),
            voltage.len()
        );
    }
    if let (Some(first), Some(last)) = (time.tokens.first(), time.tokens.last()) {
        log::debug!("time axis runs {} .. {}", first.as_str(), last.as_str());
    }
    let summary = TranscodeSummary {
        time_samples: time.len(),
        voltage_samples: voltage.len(),
    };
    // 两个输入都读完后才创建输出文件
    let document = TraceDocument::new(time.tokens, voltage.tokens);
    let file = File::create(output_path).map_err(|e| TraceError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    write_document(&mut writer, &document, style)
        .and_then(|()| writer.flush())
        .map_err(|e| TraceError::io(output_path, e))?;
    Ok(summary)
}
