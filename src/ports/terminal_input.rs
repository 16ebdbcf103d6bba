use futures::channel::mpsc;
use futures::Stream;
use std::io::BufRead;

use crate::core::orchestrators::SearchTrigger;
use crate::global_constants::{
    COMMAND_HELP, COMMAND_OPEN, COMMAND_QUIT, COMMAND_SEARCH, COMMAND_SUGGESTIONS, COMMAND_TRY,
    LOG_TAG_INPUT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalInputEvent {
    Submit { trigger: SearchTrigger, text: String },
    /// Zero-based index into the configured suggestions.
    SelectSuggestion(usize),
    ListSuggestions,
    /// Zero-based card position.
    OpenCard(usize),
    Help,
    Quit,
    Invalid(String),
}

impl TerminalInputEvent {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if !line.trim_start().starts_with(':') {
            return TerminalInputEvent::Submit {
                trigger: SearchTrigger::EnterKey,
                text: line.to_string(),
            };
        }

        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            COMMAND_SEARCH => TerminalInputEvent::Submit {
                trigger: SearchTrigger::SubmitButton,
                text: argument.to_string(),
            },
            COMMAND_TRY => Self::parse_position(command, argument)
                .map_or_else(TerminalInputEvent::Invalid, TerminalInputEvent::SelectSuggestion),
            COMMAND_OPEN => Self::parse_position(command, argument)
                .map_or_else(TerminalInputEvent::Invalid, TerminalInputEvent::OpenCard),
            COMMAND_SUGGESTIONS => TerminalInputEvent::ListSuggestions,
            COMMAND_HELP => TerminalInputEvent::Help,
            COMMAND_QUIT => TerminalInputEvent::Quit,
            unknown => TerminalInputEvent::Invalid(format!("Unknown command {}", unknown)),
        }
    }

    // Positions are typed one-based.
    fn parse_position(command: &str, argument: &str) -> Result<usize, String> {
        match argument.parse::<usize>() {
            Ok(position) if position >= 1 => Ok(position - 1),
            _ => Err(format!("{} expects a number starting at 1", command)),
        }
    }
}

pub struct TerminalInputListener;

impl TerminalInputListener {
    pub fn create_event_stream() -> impl Stream<Item = TerminalInputEvent> {
        let (event_sender, event_receiver) = mpsc::unbounded();
        Self::spawn_stdin_reader_thread(event_sender);
        event_receiver
    }

    fn spawn_stdin_reader_thread(event_sender: mpsc::UnboundedSender<TerminalInputEvent>) {
        std::thread::spawn(move || {
            log::info!("{} Starting terminal input thread", LOG_TAG_INPUT);
            Self::forward_input_lines(std::io::stdin().lock(), &event_sender);
            log::info!("{} Terminal input closed", LOG_TAG_INPUT);
        });
    }

    // Lines that are not valid UTF-8 are decoded lossily instead of ending input.
    fn forward_input_lines(
        mut reader: impl BufRead,
        event_sender: &mpsc::UnboundedSender<TerminalInputEvent>,
    ) {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(error) => {
                    log::error!("{} Failed to read input: {}", LOG_TAG_INPUT, error);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buffer);
            let event = TerminalInputEvent::parse(&line);
            log::debug!("{} {:?}", LOG_TAG_INPUT, event);

            if event_sender.unbounded_send(event).is_err() {
                break;
            }
        }
    }
}
