//! Interactive menu shell
//!
//! Reads menu choices and field values line by line, invokes the matching
//! ledger operation and renders the outcome. Generic over `BufRead` so the
//! same loop runs against stdin or an in-memory buffer.
//!
//! Domain errors are printed and the loop returns to the menu. End of input
//! ends the session the same way the Exit option does.

use crate::core::Ledger;
use crate::frontend::Frontend;
use crate::io::parse_amount;
use crate::types::BankingError;
use std::io::{BufRead, Write};

pub const MENU: &str = "Welcome to the Online Banking System\n\
                        1. Create Account\n\
                        2. View Account Details\n\
                        3. Transfer Funds\n\
                        4. View Transaction History\n\
                        5. Exit";

pub const FAREWELL: &str = "Thank you for using the Online Banking System.";

pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Options offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    ViewAccountDetails,
    TransferFunds,
    ViewTransactionHistory,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection, `None` for anything but 1-5
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::CreateAccount),
            2 => Some(MenuChoice::ViewAccountDetails),
            3 => Some(MenuChoice::TransferFunds),
            4 => Some(MenuChoice::ViewTransactionHistory),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a menu action
enum Flow {
    Continue,
    Exit,
}

/// Line-oriented menu loop over any buffered reader
pub struct InteractiveShell<R> {
    input: R,
}

impl<R: BufRead> InteractiveShell<R> {
    pub fn new(input: R) -> Self {
        InteractiveShell { input }
    }

    /// Next input line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, BankingError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(
        &mut self,
        output: &mut dyn Write,
        label: &str,
    ) -> Result<Option<String>, BankingError> {
        write!(output, "{}", label)?;
        output.flush()?;
        self.read_line()
    }

    fn create_account(
        &mut self,
        ledger: &mut Ledger,
        output: &mut dyn Write,
    ) -> Result<Flow, BankingError> {
        let Some(username) = self.prompt(output, "Enter username: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(account_number) = self.prompt(output, "Enter account number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(balance) = self.prompt(output, "Enter initial balance: ")? else {
            return Ok(Flow::Exit);
        };

        let result = parse_amount(&balance).and_then(|initial_balance| {
            ledger.create_account(&username, &account_number, initial_balance)
        });

        match result {
            Ok(()) => writeln!(output, "Account created successfully.")?,
            Err(e) => report(output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_account_details(
        &mut self,
        ledger: &Ledger,
        output: &mut dyn Write,
    ) -> Result<Flow, BankingError> {
        let Some(username) = self.prompt(output, "Enter username: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(account_number) = self.prompt(output, "Enter account number: ")? else {
            return Ok(Flow::Exit);
        };

        match ledger.view_account_details(&username, &account_number) {
            Ok(snapshot) => {
                writeln!(output, "Account Number: {}", snapshot.account_number)?;
                writeln!(output, "Balance: ${}", snapshot.balance)?;
            }
            Err(e) => report(output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn transfer_funds(
        &mut self,
        ledger: &mut Ledger,
        output: &mut dyn Write,
    ) -> Result<Flow, BankingError> {
        let Some(username) = self.prompt(output, "Enter username: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(source) = self.prompt(output, "Enter source account number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(destination) = self.prompt(output, "Enter destination account number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompt(output, "Enter amount to transfer: ")? else {
            return Ok(Flow::Exit);
        };

        let result = parse_amount(&amount)
            .and_then(|amount| ledger.transfer_funds(&username, &source, &destination, amount));

        match result {
            Ok(()) => writeln!(output, "Transfer successful.")?,
            Err(e) => report(output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_transaction_history(
        &mut self,
        ledger: &Ledger,
        output: &mut dyn Write,
    ) -> Result<Flow, BankingError> {
        let Some(username) = self.prompt(output, "Enter username: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(account_number) = self.prompt(output, "Enter account number: ")? else {
            return Ok(Flow::Exit);
        };

        match ledger.view_transaction_history(&username, &account_number) {
            Ok(history) => {
                writeln!(
                    output,
                    "Transaction History for Account Number: {}",
                    account_number
                )?;
                for event in history {
                    writeln!(output, "{}", event)?;
                }
            }
            Err(e) => report(output, &e)?,
        }
        Ok(Flow::Continue)
    }
}

impl<R: BufRead> Frontend for InteractiveShell<R> {
    fn run(&mut self, ledger: &mut Ledger, output: &mut dyn Write) -> Result<(), BankingError> {
        loop {
            writeln!(output, "{}", MENU)?;
            let Some(line) = self.prompt(output, "Choose an option: ")? else {
                writeln!(output)?;
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::CreateAccount) => self.create_account(ledger, output)?,
                Some(MenuChoice::ViewAccountDetails) => self.view_account_details(ledger, output)?,
                Some(MenuChoice::TransferFunds) => self.transfer_funds(ledger, output)?,
                Some(MenuChoice::ViewTransactionHistory) => {
                    self.view_transaction_history(ledger, output)?
                }
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    tracing::debug!(input = %line, "unrecognized menu option");
                    writeln!(output, "{}", INVALID_OPTION)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }
}

/// Render a recoverable error as a single line
fn report(output: &mut dyn Write, error: &BankingError) -> Result<(), BankingError> {
    writeln!(output, "{}", error)?;
    Ok(())
}
