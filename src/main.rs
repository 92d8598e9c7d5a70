//! Line-oriented driver: reads `<from> <to>` pairs from stdin and plays
//! them against a fresh game.

use std::io::{self, BufRead, Write};

use wipeout_chess::utils::render_game_state::render_game_state;
use wipeout_chess::GameState;

fn main() -> io::Result<()> {
    let mut game = GameState::new_game();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(&game));
    print!("{} to move> ", game.side_to_move());
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let (from, to) = match (words.next(), words.next()) {
            (Some("quit"), _) => break,
            (Some(from), Some(to)) => (from, to),
            (None, _) => {
                print!("{} to move> ", game.side_to_move());
                stdout.flush()?;
                continue;
            }
            _ => {
                println!("usage: <from> <to>   e.g. e2 e4");
                print!("{} to move> ", game.side_to_move());
                stdout.flush()?;
                continue;
            }
        };

        match game.try_move(from, to) {
            Ok(report) => {
                println!("{}", render_game_state(&game));
                if let Some(captured) = report.captured {
                    println!("{} captured a {captured}", report.mover);
                }
            }
            Err(e) => println!("illegal move: {e}"),
        }

        if game.outcome().is_decided() {
            println!("game over: {}", game.outcome());
            return Ok(());
        }

        print!("{} to move> ", game.side_to_move());
        stdout.flush()?;
    }

    Ok(())
}
