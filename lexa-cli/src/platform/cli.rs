//! CLI 格式化输出
//!
//! 结果写到 stdout；text 模式下诊断写到 stderr，json 模式下错误报告也写到 stdout。

use std::io::{self, Write};

use lexa_api::{LexaError, OutputFormat, ScanOutput, Shape};

/// 打印扫描结果
pub fn print_output(out: &mut impl Write, output: &ScanOutput, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(output).map_err(io::Error::other)?;
            writeln!(out, "{json}")
        }
        OutputFormat::Text => match &output.canonical {
            Some(canonical) => {
                writeln!(out, "[Shape] {}", output.shape)?;
                writeln!(out, "[Value] {}", output.value)?;
                writeln!(out, "[Canonical] {canonical}")?;
                writeln!(out, "[Reads] {}", output.reads)
            }
            None => writeln!(out, "{}", output.value),
        },
    }
}

/// 打印错误
///
/// 扫描错误的 Display 就是三行诊断，原样输出。
pub fn print_error(
    out: &mut impl Write,
    err: &mut impl Write,
    e: &LexaError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&e.to_report()).map_err(io::Error::other)?;
            writeln!(out, "{json}")
        }
        OutputFormat::Text => writeln!(err, "{e}"),
    }
}

/// `--list`：形状名和一行说明
pub fn print_shape_list(out: &mut impl Write) -> io::Result<()> {
    let width = Shape::ALL
        .iter()
        .map(|shape| shape.as_str().len())
        .max()
        .unwrap_or(0);
    for shape in Shape::ALL {
        writeln!(out, "{:<width$}  {}", shape.as_str(), shape.describe())?;
    }
    Ok(())
}
