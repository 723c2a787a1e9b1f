//! Shark Dive headless entry point
//!
//! Runs one round with the autopilot at a fixed 60 Hz and prints the final
//! world snapshot. Usage: `shark-dive [tuning.json] [seed]`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use shark_dive::Tuning;
    use shark_dive::consts::SIM_DT;
    use shark_dive::sim::{Asset, Autopilot, GameEvent, GamePhase, Session};

    env_logger::init();
    log::info!("Shark Dive (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(seed) => seed.parse()?,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0),
    };

    let mut session = Session::new(tuning, seed);
    let mut pilot = Autopilot::new();

    // Asset loading happens elsewhere; report it done
    session.asset_loaded(Asset::Shark);
    session.asset_loaded(Asset::Fish);
    session.push(GameEvent::ShowIntro);
    session.push(GameEvent::GameStart);

    // Ten simulated minutes is far longer than any round
    let max_ticks = (600.0 / SIM_DT) as u64;
    while session.tick_count() < max_ticks {
        session.drive(&mut pilot);
        for request in session.step(SIM_DT) {
            log::info!(
                "[{:>7.2}s] {:?} (delay {:.1}s)",
                session.tick_count() as f32 * SIM_DT,
                request.effect,
                request.delay
            );
        }
        if matches!(session.phase(), GamePhase::Dead | GamePhase::Victory) {
            break;
        }
    }

    log::info!(
        "Round over after {} ticks: {:?}",
        session.tick_count(),
        session.phase()
    );
    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
