/// Paddle input sources.  The loop asks for exactly one sample per tick,
/// before the simulation step runs.

use std::sync::mpsc;

use rand::Rng;

use crate::entities::PaddleInput;

pub trait InputSource {
    fn sample(&mut self) -> PaddleInput;
}

/// Both paddles wander: each tick each picks up, still or down uniformly.
pub struct RandomInput<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomInput<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> InputSource for RandomInput<R> {
    fn sample(&mut self) -> PaddleInput {
        PaddleInput {
            left: self.rng.gen_range(-1..=1),
            right: self.rng.gen_range(-1..=1),
        }
    }
}

/// Always returns the same sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldInput(pub PaddleInput);

impl InputSource for HeldInput {
    fn sample(&mut self) -> PaddleInput {
        self.0
    }
}

/// Samples produced on another thread (a keyboard or bus reader).
///
/// Everything queued since the last tick is drained and only the newest
/// sample is kept; with nothing queued the previous sample is repeated.
pub struct ChannelInput {
    rx: mpsc::Receiver<PaddleInput>,
    latest: PaddleInput,
}

impl ChannelInput {
    pub fn new(rx: mpsc::Receiver<PaddleInput>) -> Self {
        Self {
            rx,
            latest: PaddleInput::default(),
        }
    }
}

impl InputSource for ChannelInput {
    fn sample(&mut self) -> PaddleInput {
        while let Ok(input) = self.rx.try_recv() {
            self.latest = input;
        }
        self.latest
    }
}
