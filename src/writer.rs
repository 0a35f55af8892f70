use tb::requests::Response;
use tb::Result;

use std::io::Write;

/// Writes a response as a single line of JSON
pub fn write_json_line<W: Write>(writer: &mut W, response: &Response) -> Result {
    serde_json::to_writer(&mut *writer, response)?;
    writeln!(writer)?;

    return Ok(());
}
