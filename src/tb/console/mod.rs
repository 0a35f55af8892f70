mod simple_account;

pub use simple_account::{SimpleAccount, SimpleAccountError, MAX_WITHDRAWALS, WITHDRAWAL_LIMIT};

use crate::Result;

use std::io::{BufRead, Write};

const MENU: &str = "
[d] Deposit
[w] Withdraw
[s] Statement
[q] Quit

=> ";

const STATEMENT_HEADER: &str = "================ STATEMENT ================";
const STATEMENT_FOOTER: &str = "===========================================";

/// Runs the interactive menu until `q` or end of input, returning the final account state
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<SimpleAccount> {
    let mut account = SimpleAccount::new();

    loop {
        write!(output, "{MENU}")?;
        output.flush()?;

        let option = match read_line(&mut input)? {
            Some(option) => option,
            None => break,
        };

        match option.as_str() {
            "d" => {
                let amount = match prompt_amount(&mut input, &mut output, "deposit")? {
                    Some(amount) => amount,
                    None => continue,
                };

                match account.deposit(amount) {
                    Ok(_) => writeln!(output, "Deposit of R$ {amount}.00 completed.")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "w" => {
                let amount = match prompt_amount(&mut input, &mut output, "withdrawal")? {
                    Some(amount) => amount,
                    None => continue,
                };

                match account.withdraw(amount) {
                    Ok(_) => writeln!(output, "Withdrawal of R$ {amount}.00 completed.")?,
                    Err(e) => writeln!(output, "{e}")?,
                }
            }
            "s" => {
                writeln!(output, "\n{STATEMENT_HEADER}")?;
                writeln!(output, "{}", account.statement())?;
                writeln!(output, "{STATEMENT_FOOTER}")?;
            }
            "q" => break,
            other => {
                log::debug!("Unknown menu option: {other:?}");
                writeln!(
                    output,
                    "Invalid operation, please select the desired operation again."
                )?;
            }
        }
    }

    log::debug!("Console session finished: {account:?}");

    Ok(account)
}

/// Reads one trimmed line, `None` on end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}

/// Prompts for a whole currency amount. Unparseable input is reported and yields `None`.
fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    operation: &str,
) -> Result<Option<i64>> {
    write!(output, "Enter the {operation} amount: ")?;
    output.flush()?;

    let line = match read_line(input)? {
        Some(line) => line,
        None => return Ok(None),
    };

    match line.parse::<i64>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            writeln!(output, "Invalid input '{line}', enter a whole number.")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> (SimpleAccount, String) {
        let mut output = vec![];
        let account = run(Cursor::new(input.as_bytes()), &mut output).unwrap();

        (account, String::from_utf8(output).unwrap())
    }

    #[test]
    fn deposit_withdraw_statement() {
        let (account, output) = run_session("d\n1000\nw\n300\ns\nq\n");

        assert_eq!(account.balance(), 700);
        assert!(output.contains("Deposit of R$ 1000.00 completed."));
        assert!(output.contains("Withdrawal of R$ 300.00 completed."));
        assert!(output.contains(STATEMENT_HEADER));
        assert!(output.contains("Balance:    R$ 700.00"));
    }

    #[test]
    fn reports_rule_failures() {
        let (account, output) = run_session("d\n-5\nw\n10\nq\n");

        assert_eq!(account, SimpleAccount::new());
        assert!(output.contains("Operation failed! The amount entered is invalid."));
        assert!(output.contains("Operation failed! You don't have enough balance."));
    }

    #[test]
    fn withdrawal_count_limit() {
        let (account, output) = run_session("d\n1000\nw\n10\nw\n10\nw\n10\nw\n10\n");

        assert_eq!(account.withdrawals_made(), MAX_WITHDRAWALS);
        assert_eq!(account.balance(), 970);
        assert!(output.contains("Operation failed! Maximum number of withdrawals (3) exceeded."));
    }

    #[test]
    fn invalid_input_keeps_looping() {
        let (account, output) = run_session("x\nd\n12.50\nD\n5\n");

        assert_eq!(account.deposits(), &[5]);
        assert!(output.contains("Invalid operation, please select the desired operation again."));
        assert!(output.contains("Invalid input '12.50', enter a whole number."));
    }

    #[test]
    fn empty_statement() {
        let (_, output) = run_session("s\n");

        assert!(output.contains("No movements were made."));
    }
}
