use tb::ids::{AccountNumber, TaxId};
use tb::models::{Address, Customer, TransactionKind};
use tb::rules::TransactionError;
use tb::services::{BankError, RegistryError};
use tb::{Bank, BankConfig, Money};

use std::{fs, path::PathBuf, process::Command};

use chrono::NaiveDate;

use csv::{ReaderBuilder, Trim};

use serde::Deserialize;

#[derive(Deserialize, Debug, PartialEq)]
struct ExpectedResponse {
    success: bool,
    message: String,
}

fn build_customer(tax_id: &str) -> Customer {
    Customer {
        tax_id: TaxId::new(tax_id),
        name: "Maria Silva".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 14).unwrap(),
        address: Address {
            street: "Rua das Flores".to_string(),
            number: "100".to_string(),
            district: "Centro".to_string(),
            city_state: "São Paulo/SP".to_string(),
        },
    }
}

#[test]
fn end_to_end() {
    let mut bank = tb::build_bank(BankConfig::default());
    let tax_id = TaxId::new("11122233344");

    bank.register_customer(build_customer("11122233344")).unwrap();

    let account = bank.open_account(&tax_id).unwrap();
    assert_eq!(account.number(), AccountNumber(1));
    assert_eq!(account.balance(), Money::ZERO);

    let number = AccountNumber(1);

    assert_eq!(bank.deposit(number, Money::from_units(1000)), Ok(Money::from_units(1000)));
    assert_eq!(bank.withdraw(number, Money::from_units(500)), Ok(Money::from_units(500)));

    let account = bank.accounts().lookup(number).unwrap();
    assert_eq!(account.withdrawals_today(), 1);
    assert_eq!(
        account
            .transactions()
            .iter()
            .map(|tx| tx.kind)
            .collect::<Vec<_>>(),
        vec![TransactionKind::Deposit, TransactionKind::Withdrawal]
    );

    // three more attempts at 500: the balance runs out first, then the count does
    assert_eq!(bank.withdraw(number, Money::from_units(500)), Ok(Money::ZERO));
    assert_eq!(
        bank.withdraw(number, Money::from_units(500)),
        Err(BankError::Transaction(TransactionError::InsufficientFunds(
            Money::ZERO
        )))
    );

    bank.deposit(number, Money::from_units(500)).unwrap();
    assert_eq!(bank.withdraw(number, Money::from_units(500)), Ok(Money::ZERO));
    assert_eq!(
        bank.withdraw(number, Money::from_units(500)),
        Err(BankError::Transaction(
            TransactionError::WithdrawalLimitReached(3)
        ))
    );

    let statement = bank.statement(number).unwrap();
    assert_eq!(statement.branch_code, "0001");
    assert_eq!(statement.statement.total_deposited, Money::from_units(1500));
    assert_eq!(statement.statement.total_withdrawn, Money::from_units(1500));
    assert_eq!(statement.statement.deposit_count, 2);
    assert_eq!(statement.statement.withdrawal_count, 3);
}

#[test]
fn registry_failures_leave_state_unchanged() {
    let mut bank = Bank::default();

    assert_eq!(
        bank.open_account(&TaxId::new("11122233344")).map(|a| a.number()),
        Err(BankError::Registry(RegistryError::CustomerNotFound(
            TaxId::new("11122233344")
        )))
    );
    assert_eq!(bank.accounts().next_number(), AccountNumber(1));

    bank.register_customer(build_customer("11122233344")).unwrap();
    assert!(bank
        .register_customer(build_customer("11122233344"))
        .is_err());
    assert_eq!(bank.customers().len(), 1);

    assert_eq!(
        bank.open_account(&TaxId::new("11122233344")).map(|a| a.number()),
        Ok(AccountNumber(1))
    );
}

#[test]
fn example_files() {
    let input_dir = PathBuf::from("./resources/test-examples/inputs");
    let expected_dir = PathBuf::from("./resources/test-examples/expected");

    // Running test for each file in input_dir
    let files_to_test = fs::read_dir(input_dir.clone()).unwrap().count();

    for idx in 1..=files_to_test {
        let input_file = input_dir.join(format!("requests_{idx}.csv"));
        let expected_file = expected_dir.join(format!("responses_{idx}.csv"));

        println!("Testing input: {input_file:?}");
        println!("Expected: {expected_file:?}");

        let output = Command::new(env!("CARGO_BIN_EXE_toy-bank"))
            .args(["run", input_file.to_str().unwrap()])
            .output()
            .unwrap();

        println!("{}", String::from_utf8(output.stderr).unwrap());
        assert!(output.status.success());

        let output = String::from_utf8(output.stdout).unwrap();

        let actual: Vec<ExpectedResponse> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        let mut expected_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(expected_file)
            .unwrap();

        let expected: Vec<ExpectedResponse> = expected_reader
            .deserialize()
            .map(|record| record.unwrap())
            .collect();

        // Order matters: responses mirror the requests one to one
        assert_eq!(actual, expected);
    }
}

#[test]
fn statement_response_data() {
    let output = Command::new(env!("CARGO_BIN_EXE_toy-bank"))
        .args(["run", "./resources/test-examples/inputs/requests_1.csv"])
        .output()
        .unwrap();

    let output = String::from_utf8(output.stdout).unwrap();
    let statement: serde_json::Value = output
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .find(|response| {
            response["message"]
                .as_str()
                .map_or(false, |message| message.starts_with("Statement"))
        })
        .unwrap();

    let data = &statement["data"];
    assert_eq!(data["branch_code"], "0001");
    assert_eq!(data["account_number"], 1);
    assert_eq!(data["balance"], "100.00");
    assert_eq!(data["total_deposited"], "1000.00");
    assert_eq!(data["total_withdrawn"], "900.00");
    assert_eq!(data["deposit_count"], 1);
    assert_eq!(data["withdrawal_count"], 3);
    assert_eq!(data["transactions"].as_array().unwrap().len(), 4);
}

#[test]
fn configured_limits_from_command_line() {
    let output = Command::new(env!("CARGO_BIN_EXE_toy-bank"))
        .args([
            "run",
            "./resources/test-examples/inputs/requests_1.csv",
            "--per-withdrawal-limit",
            "1000",
            "--daily-withdrawal-limit",
            "1",
        ])
        .output()
        .unwrap();

    let output = String::from_utf8(output.stdout).unwrap();
    let messages: Vec<String> = output
        .lines()
        .map(|line| serde_json::from_str::<ExpectedResponse>(line).unwrap().message)
        .collect();

    assert_eq!(messages[6], "Withdrawal of R$ 600.00 completed successfully!");
    assert_eq!(
        messages[7],
        "You have reached the daily withdrawal limit (1). Try again in 24 hours!"
    );
}
