use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::time::{Duration, Instant};

use connect4_minimax::{search::LARGE_WIN, *};

/// Pause before an engine move so a human can follow the game
const AI_MOVE_DELAY: Duration = Duration::from_millis(1000);

fn ask_ai_controlled(player: Player) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("Is player {} AI controlled? y/n: ", player.number());
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn describe_score(score: i64) -> String {
    if score >= LARGE_WIN {
        "player 2 can force a win".to_string()
    } else if score <= -LARGE_WIN {
        "player 1 can force a win".to_string()
    } else {
        format!("score {}", score)
    }
}

fn main() -> Result<()> {
    let stdin = stdin();
    let mut game = Game::new();

    println!("Welcome to Connect 4\n");
    println!(
        "Columns are numbered 1 to {}, the AI searches {} moves ahead\n",
        COLS, DEFAULT_DEPTH
    );

    let ai_players = (
        ask_ai_controlled(Player::PlayerOne)?,
        ask_ai_controlled(Player::PlayerTwo)?,
    );

    // game loop
    loop {
        match game.state {
            GameState::Playing => {
                let ai_to_move = match game.to_move {
                    Player::PlayerOne => ai_players.0,
                    Player::PlayerTwo => ai_players.1,
                };

                let column = if ai_to_move {
                    println!("AI is thinking...");
                    stdout().flush()?;
                    std::thread::sleep(AI_MOVE_DELAY);

                    let mut searcher = Searcher::new();
                    let start_time = Instant::now();
                    let (column, score) = game.ai_move(&mut searcher, DEFAULT_DEPTH)?;
                    let elapsed = Instant::now() - start_time;

                    println!(
                        "Player {} plays column {} ({}, {} positions in {:.1}ms)",
                        game.to_move.number(),
                        column + 1,
                        describe_score(score),
                        searcher.node_count,
                        elapsed.as_secs_f64() * 1000.0
                    );
                    column
                } else {
                    print!("Player {} move input > ", game.to_move.number());
                    stdout().flush()?;
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<usize>() {
                        Ok(column @ 1..=COLS) => column - 1,
                        _ => {
                            println!("Invalid column: {}", input_str.trim());
                            continue;
                        }
                    }
                };

                if let Err(err) = game.play_checked(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                println!("Moves played: {}", game.history);
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
