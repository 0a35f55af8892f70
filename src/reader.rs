use tb::input::InputRequest;
use tb::requests::Request;
use tb::Result;

use std::{fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(filepath)?;

    return Ok(reader);
}

/// Deserializes and parses each record. A bad record yields an error in its place and
/// does not stop the iteration.
pub fn read_requests(reader: &mut Reader<File>) -> impl Iterator<Item = Result<Request>> + '_ {
    reader.deserialize::<InputRequest>().map(|record| {
        log::debug!("Parsing record into InputRequest: {record:?}");

        let input = record?;

        log::debug!("Parsing input into Request: {input:?}");

        input.parse_request()
    })
}
