//! `medcompanion ask` / `medcompanion chat`: Talk to the health assistant.

use medcompanion_agent::HealthAssistant;
use medcompanion_core::credential::Credential;
use medcompanion_core::message::ChatSession;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// One line typed at the chat prompt.
#[derive(Debug, PartialEq)]
enum ChatInput {
    Exit,
    /// `/clear`: end this conversation and start a fresh one.
    Clear,
    /// `/key <token>`; `None` if the token was blank.
    Key(Option<Credential>),
    Blank,
    Query(String),
}

fn parse_input(line: &str) -> ChatInput {
    let line = line.trim();
    match line {
        "" => ChatInput::Blank,
        "exit" | "quit" | "/exit" | "/quit" => ChatInput::Exit,
        "/clear" => ChatInput::Clear,
        _ => match line.strip_prefix("/key") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                ChatInput::Key(Credential::new(rest))
            }
            _ => ChatInput::Query(line.to_string()),
        },
    }
}

/// Single question mode.
pub async fn ask(question: String) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let mut session = ChatSession::new();
    let assistant = HealthAssistant::from_config(&config, session.credential().clone());

    eprint!("  Thinking...");
    let result = assistant.ask(&mut session, &question).await;
    eprint!("\r              \r");

    let reply = result?;
    println!("{reply}");
    Ok(())
}

/// Interactive mode. Errors from a single turn are printed and the loop
/// keeps going; only `exit` or end of input stops it.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let mut session = ChatSession::new();
    let assistant = HealthAssistant::from_config(&config, session.credential().clone());
    debug!(
        store = assistant.store().name(),
        model = assistant.client().model(),
        "Chat session started"
    );

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║      MedCompanion Assistant — Interactive     ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Model:     {}", assistant.client().model());
    match assistant.store().load_profile() {
        Ok(profile) if !profile.name.is_empty() => println!("  Patient:   {}", profile.name),
        Ok(_) => println!("  Patient:   (profile not set)"),
        Err(e) => println!("  ⚠️  {e}"),
    }
    match assistant.resolver().resolve_with_source() {
        Some((credential, source)) => {
            println!("  API key:   {} (from {source})", credential.hint());
        }
        None => {
            println!("  ⚠️  No API key found.");
            println!("     Set GEMINI_API_KEY, add it to {},", config.secrets_path.display());
            println!("     or enter one now with: /key <your-api-key>");
        }
    }
    println!();
    println!("  Ask about your medications, allergies, or upcoming visits.");
    println!("  Commands: /key <token>, /clear, exit");
    println!("  ⚕️  I am an AI, not a doctor. Always consult a healthcare professional.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match parse_input(&line) {
            ChatInput::Blank => continue,
            ChatInput::Exit => break,
            ChatInput::Clear => {
                // Ends the conversation; the key slot carries over.
                session = ChatSession::with_credential(session.credential().clone());
                println!("  🧹 Started a new conversation. Earlier messages are forgotten.\n");
            }
            ChatInput::Key(None) => println!("  Usage: /key <your-api-key>\n"),
            ChatInput::Key(Some(credential)) => {
                let hint = credential.hint();
                session.credential().set(credential);
                println!("  ✅ API key set for this session ({hint}).\n");
            }
            ChatInput::Query(query) => {
                eprint!("  ...");
                let result = assistant.ask(&mut session, &query).await;
                eprint!("\r     \r");

                match result {
                    Ok(reply) => {
                        println!();
                        for line in reply.lines() {
                            println!("  Assistant > {line}");
                        }
                        println!();
                    }
                    Err(e) => {
                        debug!(error = %e, "Turn aborted before reaching the model");
                        println!("  ❌ {e}\n");
                    }
                }
            }
        }
    }

    println!("  Goodbye! Take care.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_commands() {
        assert_eq!(parse_input("  exit "), ChatInput::Exit);
        assert_eq!(parse_input("quit"), ChatInput::Exit);
        assert_eq!(parse_input("/clear"), ChatInput::Clear);
        assert_eq!(parse_input("   "), ChatInput::Blank);
    }

    #[test]
    fn key_command_trims_token() {
        match parse_input("/key   AIzaSyExample  ") {
            ChatInput::Key(Some(credential)) => assert_eq!(credential.expose(), "AIzaSyExample"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn key_without_token_is_usage_error() {
        assert!(matches!(parse_input("/key"), ChatInput::Key(None)));
        assert!(matches!(parse_input("/key   "), ChatInput::Key(None)));
    }

    #[test]
    fn anything_else_is_a_query() {
        assert_eq!(
            parse_input("Can I take amoxicillin?"),
            ChatInput::Query("Can I take amoxicillin?".into())
        );
        assert_eq!(parse_input("/keyboard shortcuts"), ChatInput::Query("/keyboard shortcuts".into()));
        assert_eq!(parse_input("exit strategy for my meds"), ChatInput::Query("exit strategy for my meds".into()));
    }
}
