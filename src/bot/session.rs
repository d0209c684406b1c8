//! Interactive command loop.

use std::io::{BufRead, Write};

use super::handlers::{
    add_contact, change_contact, error_message, show_all, show_phone, ContactResult, Operation,
};
use super::parser::{parse_input, Command};
use super::store::ContactStore;
use crate::types::config::BotConfig;
use crate::AssistantResult;

/// What the loop does after a line has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and wait for the next line.
    Continue(String),

    /// Print the text and stop.
    Exit(String),

    /// Nothing to print.
    Silent,
}

/// One bot session owning its contact store.
#[derive(Debug)]
pub struct Session {
    config: BotConfig,
    contacts: ContactStore,
}

impl Session {
    /// Creates a session with an empty contact store.
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            contacts: ContactStore::new(),
        }
    }

    /// Contacts collected so far.
    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    /// Parses and dispatches one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_input(line) {
            Some(command) => self.dispatch(&command),
            None => Reply::Silent,
        }
    }

    /// Routes a command to its handler.
    pub fn dispatch(&mut self, command: &Command) -> Reply {
        tracing::debug!(command = %command.name, args = command.args.len(), "dispatching");

        let args = command.args.as_slice();
        match command.name.as_str() {
            "close" | "exit" => Reply::Exit("Good bye!".to_string()),
            "hello" => Reply::Continue("How can I help you?".to_string()),
            "add" => render(Operation::Add, add_contact(args, &mut self.contacts)),
            "change" => render(Operation::Change, change_contact(args, &mut self.contacts)),
            "phone" => render(Operation::Phone, show_phone(args, &self.contacts)),
            "all" => Reply::Continue(show_all(&self.contacts)),
            other => {
                tracing::debug!(command = other, "unknown command");
                Reply::Continue("Invalid command.".to_string())
            }
        }
    }

    /// Runs the loop until `close`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> AssistantResult<()> {
        writeln!(output, "{}", self.config.welcome)?;

        let mut line = String::new();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed");
                break;
            }

            match self.handle_line(&line) {
                Reply::Continue(text) => writeln!(output, "{}", text)?,
                Reply::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
                Reply::Silent => {}
            }
        }

        output.flush()?;
        Ok(())
    }
}

fn render(operation: Operation, result: ContactResult) -> Reply {
    match result {
        Ok(text) => Reply::Continue(text),
        Err(err) => {
            tracing::info!(%operation, error = %err, "contact operation rejected");
            Reply::Continue(error_message(operation, &err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> BotConfig {
        BotConfig {
            prompt: String::new(),
            welcome: "hi".to_string(),
        }
    }

    fn run_lines(lines: &[&str]) -> Vec<String> {
        let mut session = Session::new(quiet_config());
        let input = lines.join("\n");
        let mut output = Vec::new();
        session.run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .skip(1)
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_scenario() {
        let out = run_lines(&[
            "add Alice 123",
            "phone Alice",
            "change Alice 456",
            "phone Alice",
            "exit",
        ]);
        assert_eq!(
            out,
            vec![
                "Contact added.",
                "123",
                "Contact updated.",
                "456",
                "Good bye!"
            ]
        );
    }

    #[test]
    fn test_hello_and_invalid() {
        let mut session = Session::new(quiet_config());
        assert_eq!(
            session.handle_line("HELLO"),
            Reply::Continue("How can I help you?".to_string())
        );
        assert_eq!(
            session.handle_line("remove Alice"),
            Reply::Continue("Invalid command.".to_string())
        );
    }

    #[test]
    fn test_missing_phone_is_reported() {
        let mut session = Session::new(quiet_config());
        assert_eq!(
            session.handle_line("add Alice"),
            Reply::Continue("Give me name and phone please.".to_string())
        );
        assert!(session.contacts().is_empty());
    }

    #[test]
    fn test_close_and_exit_terminate() {
        let mut session = Session::new(quiet_config());
        assert_eq!(session.handle_line("close"), Reply::Exit("Good bye!".to_string()));
        assert_eq!(session.handle_line("Exit"), Reply::Exit("Good bye!".to_string()));
    }

    #[test]
    fn test_blank_line_is_silent() {
        let mut session = Session::new(quiet_config());
        assert_eq!(session.handle_line("   "), Reply::Silent);

        let out = run_lines(&["", "hello", "exit"]);
        assert_eq!(out, vec!["How can I help you?", "Good bye!"]);
    }

    #[test]
    fn test_lines_after_exit_are_ignored() {
        let out = run_lines(&["exit", "add Alice 1"]);
        assert_eq!(out, vec!["Good bye!"]);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let out = run_lines(&["add Alice 123", "all"]);
        assert_eq!(out, vec!["Contact added.", "Alice: 123"]);
    }

    #[test]
    fn test_all_on_empty_store() {
        let mut session = Session::new(quiet_config());
        assert_eq!(session.handle_line("all"), Reply::Continue(String::new()));
    }

    #[test]
    fn test_welcome_and_prompt_are_printed() {
        let mut session = Session::new(BotConfig::default());
        let mut output = Vec::new();
        session.run("exit\n".as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Welcome to the assistant bot!\nEnter a command: Good bye!\n"
        );
    }
}
