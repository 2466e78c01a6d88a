use std::io::{stdout, BufWriter};

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use matrix_pong::config::TICK_PERIOD;
use matrix_pong::display::AnsiTerminalSink;
use matrix_pong::game_loop::GameLoop;
use matrix_pong::input::RandomInput;
use matrix_pong::pacing::FixedSleep;

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the frame dump.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    let input = RandomInput::new(thread_rng());
    let rng = StdRng::from_entropy();

    let mut game = GameLoop::new(input, rng);
    game.add_sink(Box::new(AnsiTerminalSink::new(BufWriter::new(stdout()))));

    // Runs until the process is signalled.
    game.run(&mut FixedSleep::new(TICK_PERIOD))
}
