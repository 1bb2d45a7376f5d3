use broadside::{
    init_logging,
    ui::{describe_error, describe_shot, parse_coord, render_grid, render_snapshot},
    BattleEngine, Phase, Side, COMPUTER_TURN_DELAY_MS,
};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about = "Naval combat against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = COMPUTER_TURN_DELAY_MS, help = "Pause before each computer shot, in milliseconds")]
    delay_ms: u64,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let delay = Duration::from_millis(cli.delay_ms);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut engine = BattleEngine::new(&mut rng)?;

    loop {
        if !place_fleet(&mut engine, &mut rng, &mut input).await? {
            return Ok(());
        }
        engine.start_game()?;
        if !play(&mut engine, &mut rng, &mut input, delay).await? {
            return Ok(());
        }
        println!("{}", render_snapshot(&engine.snapshot()));
        match prompt(&mut input, "Play again? [y/N]: ").await? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => engine.reset(&mut rng)?,
            _ => return Ok(()),
        }
    }
}

/// Print `message` and read one trimmed line. `None` means stdin closed.
async fn prompt(input: &mut Input, message: &str) -> anyhow::Result<Option<String>> {
    use std::io::Write;
    print!("{}", message);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

/// Walk the player through placing each catalog ship. Returns `false` on EOF.
async fn place_fleet(
    engine: &mut BattleEngine,
    rng: &mut SmallRng,
    input: &mut Input,
) -> anyhow::Result<bool> {
    println!("\n==================== SHIP PLACEMENT ====================");
    println!("Enter the leftmost cell of each ship (e.g., A5). Ships lie horizontally.");
    println!("Press ENTER for a random position, or type 'done' to start early.");

    let pending: Vec<_> = engine.unplaced_ships().collect();
    for ship in pending {
        engine.select_ship(ship)?;
        loop {
            println!("\n{}", render_grid(engine.player_grid(), true));
            let message = format!("Place {}: ", ship);
            let Some(line) = prompt(input, &message).await? else {
                return Ok(false);
            };
            if line.eq_ignore_ascii_case("done") {
                return Ok(true);
            }
            let target = if line.is_empty() {
                engine.player_grid().random_placement(rng, ship)
            } else {
                match parse_coord(&line) {
                    Ok(coord) => Ok(coord),
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                }
            };
            match target.and_then(|(row, col)| engine.place_selected_ship(row, col)) {
                Ok(placement) => {
                    println!("{} placed.", placement.ship.name());
                    break;
                }
                Err(err) => println!("{}", describe_error(&err)),
            }
        }
    }
    Ok(true)
}

/// Alternate shots until someone wins. Returns `false` on EOF.
async fn play(
    engine: &mut BattleEngine,
    rng: &mut SmallRng,
    input: &mut Input,
    delay: Duration,
) -> anyhow::Result<bool> {
    println!("\n======================== BATTLE ========================");
    while engine.phase() == Phase::Playing {
        let report = match engine.turn() {
            Side::Player => {
                println!("\n{}", render_snapshot(&engine.snapshot()));
                let Some(line) = prompt(input, "Your shot: ").await? else {
                    return Ok(false);
                };
                let (row, col) = match parse_coord(&line) {
                    Ok(coord) => coord,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                };
                match engine.player_fire(row, col) {
                    Ok(report) => report,
                    Err(err) => {
                        println!("{}", describe_error(&err));
                        continue;
                    }
                }
            }
            Side::Computer => {
                println!("The computer is aiming...");
                sleep(delay).await;
                engine.computer_fire(rng)?
            }
        };
        println!("{}", describe_shot(&report));
    }
    Ok(true)
}
