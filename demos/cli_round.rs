//! CLI blackjack round example.
//!
//! Set `RUST_LOG=debug` to see engine transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Card, Controls, Presenter, RoundEngine, RoundOptions, Suit, hand_value};

struct Terminal;

impl Presenter for Terminal {
    fn render(&mut self, player: &[Card], dealer: &[Card], status: &str) {
        println!();
        println!(
            "Dealer: {} (value {})",
            format_cards(dealer),
            hand_value(dealer)
        );
        println!(
            "You:    {} (value {})",
            format_cards(player),
            hand_value(player)
        );
        println!("{status}");
    }
}

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut engine = RoundEngine::new(RoundOptions::default(), seed);
    let mut terminal = Terminal;

    engine.render(&mut terminal);

    loop {
        let controls = Controls::for_state(engine.state());
        println!("{}", format_actions(controls));

        match prompt_line("Action: ").as_str() {
            "n" | "start" if controls.start => {
                engine.start_round();
            }
            "h" | "hit" if controls.hit => {
                if let Err(err) = engine.hit() {
                    println!("Action error: {err}");
                    continue;
                }
            }
            "s" | "stand" if controls.stand => {
                if let Err(err) = engine.stand() {
                    println!("Action error: {err}");
                    continue;
                }
            }
            "q" | "quit" | "" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Not available right now.");
                continue;
            }
        }

        engine.render(&mut terminal);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_actions(controls: Controls) -> String {
    let parts = [
        format_action("start", "n", controls.start),
        format_action("hit", "h", controls.hit),
        format_action("stand", "s", controls.stand),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
