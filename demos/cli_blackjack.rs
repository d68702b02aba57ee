//! CLI blackjack example.

use std::io::{self, Write};

use shoejack::{
    Card, GameMode, Hand, HandOutcome, HandSlot, PlayerInput, RoundError, RoundRequest,
    RoundResult, Seat, SessionEnd, SplitChoice, Table, TableOptions, TableView, TurnChoice,
    render_cards,
};

struct Console;

impl PlayerInput for Console {
    fn next_round(&mut self) -> Option<RoundRequest> {
        let mode = loop {
            match prompt_line("Game type: [1] blackjack [2] split (q to quit): ").as_str() {
                "1" => break GameMode::Classic,
                "2" => break GameMode::Split,
                "q" | "quit" => return None,
                _ => println!("Please enter 1 or 2."),
            }
        };

        let bet = prompt_usize("Bet amount: ")?;
        Some(RoundRequest::new(mode, bet))
    }

    fn choose_split(&mut self, hand: &Hand) -> SplitChoice {
        println!("You can split {}.", render_cards(hand.cards()));
        match prompt_line("Split? (y/n): ").as_str() {
            "y" | "yes" => SplitChoice::Accept,
            _ => SplitChoice::Decline,
        }
    }

    fn choose_turn(&mut self, slot: HandSlot, _hand: &Hand) -> TurnChoice {
        loop {
            let prompt = match slot {
                HandSlot::Primary => "[s]tand or [h]it: ",
                HandSlot::Split => "Split hand: [s]tand or [h]it: ",
            };
            match prompt_line(prompt).as_str() {
                "s" | "stand" | "q" => return TurnChoice::Stand,
                "h" | "hit" => return TurnChoice::Hit,
                _ => println!("Unknown action."),
            }
        }
    }
}

struct Printer;

impl TableView for Printer {
    fn shoes(&mut self, remaining: &[usize]) {
        let counts: Vec<String> = remaining.iter().map(|n| format!("[{n}]")).collect();
        println!("\nShoes: {}", counts.join(" "));
    }

    fn dealer_up_card(&mut self, card: &Card) {
        println!("Dealer: {card} ??");
    }

    fn hand_changed(&mut self, seat: Seat, hand: &Hand) {
        let label = match seat {
            Seat::Player(HandSlot::Primary) => "You",
            Seat::Player(HandSlot::Split) => "Split hand",
            Seat::Dealer => "Dealer",
        };
        println!("{label}: {} (total {})", render_cards(hand.cards()), hand.total());
    }

    fn bust(&mut self, _slot: HandSlot, total: u8) {
        println!("Bust with {total}!");
    }

    fn round_settled(&mut self, result: &RoundResult) {
        for hand in &result.hands {
            let message = match hand.outcome {
                HandOutcome::Win => format!("You win! Payout: {}.", hand.payout),
                HandOutcome::Lose => "You lose.".to_string(),
                HandOutcome::Push => format!("Push. Returned: {}.", hand.payout),
            };
            println!(
                "Hand {}: {} vs dealer {}. {message}",
                hand.hand_index, hand.player_value, hand.dealer_value
            );
        }
        println!("Net this round: {}", result.net);
    }

    fn round_aborted(&mut self, error: &RoundError) {
        println!("Round stopped: {error}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("Blackjack CLI example");

    let mut table = Table::from_time(TableOptions::default());
    match table.run(&mut Console, &mut Printer) {
        Ok(summary) => {
            if summary.end == SessionEnd::ShoeExhausted {
                println!("A shoe ran out of cards. Game over.");
            }
            println!("Rounds played: {} (net {})", summary.rounds, summary.net);
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // End of input quits.
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
