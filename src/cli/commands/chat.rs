use crate::cli::parser::Commands;
use crate::core::chat::Transcript;
use crate::errors::AppResult;
use crate::ui::render::print_message;
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Chat { messages, json } = cmd {
        let mut transcript = Transcript::new();

        if messages.is_empty() {
            interactive(&mut transcript)?;
        } else {
            if !*json {
                print_new(&transcript, 0);
            }
            for text in messages {
                let before = transcript.messages().len();
                take_turn(&mut transcript, text)?;
                if !*json {
                    print_new(&transcript, before);
                }
            }
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(transcript.messages())?);
        }
    }
    Ok(())
}

/// A bare number picks that option (1-based) from the last assistant
/// message, as if the user had clicked it. Anything else is typed text.
fn take_turn(transcript: &mut Transcript, input: &str) -> AppResult<()> {
    let picked = input.trim().parse::<usize>().ok().and_then(|n| {
        let last = transcript.last_bot_message()?;
        let count = last.options.as_ref().map_or(0, Vec::len);
        (1..=count).contains(&n).then(|| (last.id, n - 1))
    });

    match picked {
        Some((message_id, index)) => transcript.select_option(message_id, index)?,
        None => transcript.send(input)?,
    };
    Ok(())
}

fn print_new(transcript: &Transcript, from: usize) {
    for msg in &transcript.messages()[from..] {
        print_message(msg);
    }
}

fn interactive(transcript: &mut Transcript) -> AppResult<()> {
    print_new(transcript, 0);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let before = transcript.messages().len();
        take_turn(transcript, input)?;
        print_new(transcript, before);
    }

    Ok(())
}
