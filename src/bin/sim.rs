use broadside::{init_logging, pick_target, BattleEngine, Phase, Side, SHIPS};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play automated games through the engine and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    games: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut engine = BattleEngine::new(&mut rng)?;
    let mut total_shots = 0usize;

    for game in 0..args.games {
        if game > 0 {
            engine.reset(&mut rng)?;
        }
        for ship in SHIPS {
            let (row, col) = engine.player_grid().random_placement(&mut rng, ship)?;
            engine.select_ship(ship)?;
            engine.place_selected_ship(row, col)?;
        }
        engine.start_game()?;

        while engine.phase() == Phase::Playing {
            match engine.turn() {
                Side::Player => {
                    let hidden = engine.snapshot().computer_grid;
                    let (row, col) = pick_target(&hidden, &mut rng)
                        .ok_or_else(|| anyhow::anyhow!("no targets left"))?;
                    engine.player_fire(row, col)?;
                }
                Side::Computer => {
                    engine.computer_fire(&mut rng)?;
                }
            }
        }
        total_shots += engine.shots().len();
    }

    let wins = engine.wins();
    let result = json!({
        "games": args.games,
        "player_wins": wins.player,
        "computer_wins": wins.computer,
        "player_shots": total_shots,
        "final_phase": engine.phase(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
