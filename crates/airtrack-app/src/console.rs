//! Console loop: one request per input line, one JSON response per output line.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::input::parse_text_command;
use crate::state::{AppState, ConsoleRequest, ConsoleResponse};

/// Parse a line as JSON when it looks like an object, else as a text command.
pub fn parse_line(line: &str) -> AppResult<ConsoleRequest> {
    if line.trim_start().starts_with('{') {
        ConsoleRequest::from_json(line)
    } else {
        parse_text_command(line)
    }
}

/// Run until `quit` or end of input. Bad lines are answered with an error
/// response and do not stop the loop.
pub fn run(
    state: &AppState,
    input: impl BufRead,
    mut output: impl Write,
    pretty: bool,
) -> AppResult<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request = parse_line(&line);
        let quit = matches!(request, Ok(ConsoleRequest::Quit));
        let response = match request.and_then(|r| state.handle(r)) {
            Ok(response) => response,
            Err(e) => {
                warn!("request failed: {e}");
                ConsoleResponse::failure(&e)
            }
        };
        debug!(ok = response.ok, "{}", response.message);

        let json = if pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        writeln!(output, "{json}")?;
        output.flush()?;

        if quit {
            info!("quit requested");
            break;
        }
    }
    Ok(())
}
