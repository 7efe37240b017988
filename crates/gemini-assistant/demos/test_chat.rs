//! Simple test for GeminiAssistant chat completion.
//!
//! Run with: cargo run -p gemini-assistant --example test_chat
//! Or with a custom message: cargo run -p gemini-assistant --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   GEMINI_API_KEY - Gemini API key (API_KEY is also accepted)

use catalog::Catalog;
use gemini_assistant::{Assistant, ChatMessage, GeminiAssistant};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "Do you have Kind of Blue?".to_string()
    };

    println!("Initializing GeminiAssistant...");
    let catalog = Catalog::builtin()?;
    let assistant = GeminiAssistant::from_env(&catalog)?;

    println!("Assistant initialized: {}", assistant.name());
    println!("API URL: {}", assistant.config().api_url);
    println!("Model: {}", assistant.config().model);
    println!("Products in prompt: {}", catalog.len());
    println!("Prompt fingerprint: {}", assistant.system_prompt_hash());
    println!(
        "API key configured: {}",
        assistant.config().resolve_api_key().is_some()
    );
    println!();

    let greeting = ChatMessage::model("Welcome to the shop! Ask me anything about vinyl.");

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let outcome = assistant.respond(&[greeting], &message_text).await;
    println!("Outcome: {}", outcome.kind());

    println!("=== Response ===");
    println!("{}", outcome.into_text(&assistant.fallbacks()));
    println!("================");

    Ok(())
}
