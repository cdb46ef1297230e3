use std::path::PathBuf;
use clap::Parser;
use crate::trace::OutputStyle;
/// Merge a time column and a voltage column into one JSON voltage trace.
#[derive(Debug, Parser)]
#[command(name = "mitral-trace", version, about)]
pub struct Cli {
    /// Text file with one time value per line
    pub time_file: PathBuf,
    /// Text file with one voltage value per line, aligned with TIME_FILE
    pub voltage_file: PathBuf,
    /// JSON file to create or overwrite
    pub output_file: PathBuf,
    /// Write the document on a single line
    #[arg(long)]
    pub compact: bool,
}
impl Cli {
    pub fn style(&self) -> OutputStyle {
        if self.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::Pretty
        }
    }
    /// Names all three files, since a failure may come from any of them.
    pub fn describe(&self) -> String {
        format!(
            "{} from {} and {}",
            self.output_file.display(),
            self.time_file.display(),
            self.voltage_file.display()
        )
    }
}
