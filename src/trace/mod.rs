// src/trace/mod.rs
// 声明读取、文档、转换各子模块
pub mod document;
pub mod error;
pub mod pipeline;
pub mod source;
// 公开导出常用类型，方便 main 调用
pub use document::TraceDocument;
pub use error::TraceError;
pub use pipeline::{transcode, OutputStyle};
pub use source::Token;
