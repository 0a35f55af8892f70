mod args;
mod config;
mod reader;
mod writer;

use args::Command;

use tb::{requests::Response, Bank, Result};

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

fn main() -> Result {
    config::configure_logging()?;

    let args = args::parse_args();

    log::debug!("Application configured with {args:?}");

    match args.command {
        Command::Run {
            input,
            per_withdrawal_limit,
            daily_withdrawal_limit,
        } => {
            let config = config::build_bank_config(per_withdrawal_limit, daily_withdrawal_limit);
            let mut bank = tb::build_bank(config);

            process_requests(&mut bank, input)?;
        }
        Command::Console => {
            let stdin = io::stdin();
            let stdout = io::stdout();

            tb::console::run(stdin.lock(), stdout.lock())?;
        }
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the requests file, handle each request in order, and write every response to stdout
fn process_requests(bank: &mut Bank, input: PathBuf) -> Result {
    let input_path = args::canonicalize_input(input)?;
    log::debug!("Reading requests from: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;
    let mut wtr = BufWriter::new(io::stdout().lock());

    for (idx, request) in reader::read_requests(&mut rdr).enumerate() {
        let response = match request {
            Ok(request) => bank.handle(request),
            Err(e) => {
                log::warn!("Skipping request {idx}: {e}");
                Response::failure(e.to_string())
            }
        };

        log::debug!("Response to request {idx}: {response:?}");

        writer::write_json_line(&mut wtr, &response)?;
    }

    wtr.flush()?;

    log::debug!("Processed requests. Accounts open: {}", bank.accounts().list().len());

    Ok(())
}
