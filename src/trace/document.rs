use serde::Serialize;
use crate::trace::Token;
pub const CELL_ID: &str = "0";
pub const UNITS: &str = "mV";
pub const TRACE_NAME: &str = "neuron";
/// Voltage trace of a single mitral cell, in the layout downstream plotting expects.
///
/// Field order here is the key order of the written JSON object.
#[derive(Clone, Debug, Serialize)]
pub struct TraceDocument {
    mitral_neuron_cell: &'static str,
    pub data: TraceData,
    units: &'static str,
    name: &'static str,
}
#[derive(Clone, Debug, Serialize)]
pub struct TraceData {
    pub time: Vec<Token>,
    pub voltage: Vec<Token>,
}
impl TraceDocument {
    pub fn new(time: Vec<Token>, voltage: Vec<Token>) -> Self {
        Self {
            mitral_neuron_cell: CELL_ID,
            data: TraceData { time, voltage },
            units: UNITS,
            name: TRACE_NAME,
        }
    }
}
