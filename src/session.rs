//! Interactive console session: menu rendering and choice dispatch.
//!
//! The session is generic over its input and output so the same loop runs
//! against stdin/stdout in the binary and against in-memory buffers in tests.

use crate::error::Result;
use crate::ledger::Ledger;
use crate::operations::AccountOperations;
use crate::request::Request;
use log::debug;
use std::io::{BufRead, Write};

/// Menu lines printed at the start of every iteration.
pub const MENU: [&str; 7] = [
    "--------------------------------",
    "Account Management System",
    "1. View Balance",
    "2. Credit Account",
    "3. Debit Account",
    "4. Exit",
    "--------------------------------",
];

const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";
const CREDIT_PROMPT: &str = "Enter credit amount: ";
const DEBIT_PROMPT: &str = "Enter debit amount: ";
const INVALID_CHOICE: &str = "Invalid choice, please select 1-4.";
const GOODBYE: &str = "Exiting the program. Goodbye!";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Credit,
    Debit,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Maps a raw input line to a menu choice, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => MenuChoice::View,
            "2" => MenuChoice::Credit,
            "3" => MenuChoice::Debit,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Drives the menu loop over a single owned [`Ledger`].
pub struct Session<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
    running: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh ledger at the opening balance.
    pub fn new(input: R, output: W) -> Self {
        Self::with_ledger(Ledger::new(), input, output)
    }

    /// Creates a session over an existing ledger.
    pub fn with_ledger(ledger: Ledger, input: R, output: W) -> Self {
        Session {
            ledger,
            input,
            output,
            running: true,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            self.display_menu()?;

            match self.prompt(CHOICE_PROMPT)? {
                Some(line) => self.process_choice(MenuChoice::parse(&line))?,
                None => {
                    debug!("Input closed, ending session");
                    self.running = false;
                }
            }
        }

        writeln!(self.output, "{}", GOODBYE)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints the menu block.
    pub fn display_menu(&mut self) -> Result<()> {
        for line in MENU {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Handles one menu selection.
    pub fn process_choice(&mut self, choice: MenuChoice) -> Result<()> {
        let request = match choice {
            MenuChoice::View => Request::View,
            MenuChoice::Credit => Request::Credit(self.read_amount(CREDIT_PROMPT)?),
            MenuChoice::Debit => Request::Debit(self.read_amount(DEBIT_PROMPT)?),
            MenuChoice::Exit => {
                self.running = false;
                return Ok(());
            }
            MenuChoice::Invalid => {
                writeln!(self.output, "{}", INVALID_CHOICE)?;
                return Ok(());
            }
        };

        let result = AccountOperations::new(&mut self.ledger).apply(request);
        writeln!(self.output, "{}", result)?;
        Ok(())
    }

    /// Returns `true` until the user has chosen to exit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the session's ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts for an amount; end of input yields an empty string.
    fn read_amount(&mut self, prompt: &str) -> Result<String> {
        Ok(self.prompt(prompt)?.unwrap_or_default())
    }

    /// Writes a prompt and reads one line. Returns `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than treated as an
    /// I/O failure, so they surface as an invalid choice or amount.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::error::SessionError;
    use std::io::{self, Cursor};
    use std::str::FromStr;

    fn run_session(input: &str) -> (String, Money) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new());
        session.run().unwrap();
        let balance = session.ledger().read();
        let output = String::from_utf8(session.into_output()).unwrap();
        (output, balance)
    }

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::View);
        assert_eq!(MenuChoice::parse("2\n"), MenuChoice::Credit);
        assert_eq!(MenuChoice::parse(" 3 \r\n"), MenuChoice::Debit);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("9"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
    }

    #[test]
    fn test_display_menu() {
        let mut session = Session::new(Cursor::new(String::new()), Vec::new());
        session.display_menu().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, MENU);
    }

    #[test]
    fn test_exit_choice_stops_loop() {
        let (output, balance) = run_session("4\n");

        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
        assert_eq!(output.matches("Account Management System").count(), 1);
        assert_eq!(balance, money("1000"));
    }

    #[test]
    fn test_invalid_choice_keeps_running() {
        let mut session = Session::new(Cursor::new(String::new()), Vec::new());
        session.process_choice(MenuChoice::Invalid).unwrap();
        assert!(session.is_running());

        session.process_choice(MenuChoice::View).unwrap();
        assert!(session.is_running());

        let output = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(
            output,
            "Invalid choice, please select 1-4.\nCurrent balance: 1000.00\n"
        );
    }

    #[test]
    fn test_credit_prompts_for_amount() {
        let (output, balance) = run_session("2\n50.00\n4\n");

        assert!(output.contains("Enter credit amount: Amount credited. New balance: 1050.00\n"));
        assert_eq!(balance, money("1050"));
    }

    #[test]
    fn test_debit_prompts_for_amount() {
        let (output, balance) = run_session("3\n600\n3\n400\n4\n");

        assert!(output.contains("Enter debit amount: Amount debited. New balance: 600.00\n"));
        assert!(output.contains("Enter debit amount: Amount debited. New balance: 200.00\n"));
        assert_eq!(balance, money("200"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (output, balance) = run_session("1\n");

        assert!(output.contains("Current balance: 1000.00"));
        assert_eq!(output.matches("Account Management System").count(), 2);
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
        assert_eq!(balance, money("1000"));
    }

    #[test]
    fn test_end_of_input_at_amount_prompt_is_invalid_amount() {
        let (output, balance) = run_session("2\n");

        assert!(output.contains("Invalid amount. Please enter a positive number."));
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
        assert_eq!(balance, money("1000"));
    }

    #[test]
    fn test_sessions_over_seeded_ledger() {
        let ledger = Ledger::with_balance(Money::ZERO);
        let mut session = Session::with_ledger(ledger, Cursor::new("3\n0.01\n4\n"), Vec::new());
        session.run().unwrap();

        assert!(session.ledger().read().is_zero());
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Insufficient funds for this debit."));
    }

    #[test]
    fn test_invalid_utf8_choice_is_invalid_choice() {
        let input = Cursor::new(vec![0xff, 0xfe, b'\n', b'4', b'\n']);
        let mut session = Session::new(input, Vec::new());
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Invalid choice, please select 1-4.\n"));
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn test_invalid_utf8_amount_is_invalid_amount() {
        let input = Cursor::new(vec![b'2', b'\n', b'5', 0xc3, b'\n', b'4', b'\n']);
        let mut session = Session::new(input, Vec::new());
        session.run().unwrap();

        assert_eq!(session.ledger().read(), Money::OPENING);
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Enter credit amount: Invalid amount. Please enter a positive number.\n"));
    }

    /// Writer whose every write fails, as with a closed stdout.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_output_failure_propagates_as_io_error() {
        let mut session = Session::new(Cursor::new("1\n4\n"), ClosedPipe);

        match session.run() {
            Err(SessionError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected I/O error, got {:?}", other),
        }
        assert_eq!(session.ledger().read(), Money::OPENING);
    }
}
