//! Scenario walkthrough for the banking crate.
//!
//! Plays the canonical account flows (open, then deposits, then a withdrawal)
//! against an in-memory account, checking observed state against expected
//! literals and reporting one line per check plus a final summary through
//! structured logs.

use anyhow::{Result, bail};

use passbook_banking::{
    Account, AccountEvent, DepositMoney, EventProcessor, OpenAccount, WithdrawMoney,
};

fn open(status: &str, initial_balance: i64) -> AccountEvent {
    AccountEvent::OpenAccount(OpenAccount {
        status: status.to_string(),
        initial_balance,
    })
}

fn deposit(amount: i64, description: &str) -> AccountEvent {
    AccountEvent::DepositMoney(DepositMoney {
        amount,
        description: Some(description.to_string()),
    })
}

fn withdraw(amount: i64, description: &str, method: &str) -> AccountEvent {
    AccountEvent::WithdrawMoney(WithdrawMoney {
        amount,
        description: Some(description.to_string()),
        method: Some(method.to_string()),
    })
}

/// Counts checks and reports each outcome as it happens.
struct Report {
    checks: u32,
    passed: u32,
}

impl Report {
    fn new() -> Self {
        Self {
            checks: 0,
            passed: 0,
        }
    }

    fn check_eq<T>(&mut self, label: &str, expected: T, actual: T)
    where
        T: PartialEq + core::fmt::Debug,
    {
        self.checks += 1;
        if expected == actual {
            self.passed += 1;
            tracing::info!(label, actual = ?actual, "check passed");
        } else {
            tracing::error!(label, expected = ?expected, actual = ?actual, "check failed");
        }
    }
}

fn opens_account(processor: &EventProcessor, report: &mut Report) -> Result<()> {
    let mut account = Account::new();

    processor.apply(&mut account, &open("OPEN", 0))?;

    report.check_eq("status after open", "OPEN", account.status());
    report.check_eq("balance after open", 0, account.balance());
    Ok(())
}

fn deposits_money(processor: &EventProcessor, report: &mut Report) -> Result<()> {
    let mut account = Account::new();

    processor.apply(&mut account, &open("OPEN", 0))?;
    processor.apply(&mut account, &deposit(100, "Wpłata 1 zł"))?;

    report.check_eq("balance after deposit", 100, account.balance());
    Ok(())
}

fn withdraws_money(processor: &EventProcessor, report: &mut Report) -> Result<()> {
    let mut account = Account::new();

    processor.apply(&mut account, &open("OPEN", 0))?;
    processor.apply(&mut account, &deposit(100, "Wpłata 1 zł"))?;
    processor.apply(&mut account, &deposit(200, "Wpłata 2 zł"))?;
    processor.apply(
        &mut account,
        &withdraw(50, "Wypłata środków", "bank_transfer"),
    )?;

    report.check_eq("balance after withdrawal", 250, account.balance());
    Ok(())
}

fn main() -> Result<()> {
    passbook_observability::init();

    let processor = EventProcessor::new();
    let mut report = Report::new();

    opens_account(&processor, &mut report)?;
    deposits_money(&processor, &mut report)?;
    withdraws_money(&processor, &mut report)?;

    if report.passed == report.checks {
        tracing::info!(checks = report.checks, "all checks passed");
        Ok(())
    } else {
        bail!(
            "{} of {} checks failed",
            report.checks - report.passed,
            report.checks
        );
    }
}
