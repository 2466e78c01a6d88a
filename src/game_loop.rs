/// Orchestration: sample input → tick → render → flush sinks → wait.
///
/// One owner, one thread.  Nothing here runs concurrently with a tick.

use rand::Rng;

use crate::compute::{apply_input, init_game, tick};
use crate::display::DisplaySink;
use crate::entities::GameWorld;
use crate::frame::FrameBuffer;
use crate::input::InputSource;
use crate::pacing::TickScheduler;
use crate::render::render_into;

pub struct GameLoop<I: InputSource, R: Rng> {
    world: GameWorld,
    input: I,
    rng: R,
    frame: FrameBuffer,
    sinks: Vec<Box<dyn DisplaySink>>,
    ticks: u64,
}

impl<I: InputSource, R: Rng> GameLoop<I, R> {
    pub fn new(input: I, mut rng: R) -> Self {
        let world = init_game(&mut rng);
        Self {
            world,
            input,
            rng,
            frame: FrameBuffer::new(),
            sinks: Vec::new(),
            ticks: 0,
        }
    }

    /// Replace the starting world, e.g. to resume from a known position.
    pub fn with_world(mut self, world: GameWorld) -> Self {
        self.world = world;
        self
    }

    pub fn add_sink(&mut self, sink: Box<dyn DisplaySink>) {
        self.sinks.push(sink);
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// The frame produced by the most recent `step`.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run exactly one tick and hand the result to every sink.
    ///
    /// Sink failures are logged and otherwise ignored so a missing display
    /// never stalls the simulation.
    pub fn step(&mut self) -> &FrameBuffer {
        let input = self.input.sample();
        self.world = apply_input(&self.world, input);
        self.world = tick(&self.world, &mut self.rng);
        self.ticks += 1;

        render_into(&self.world, &mut self.frame);

        for (index, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(err) = sink.show(&self.frame) {
                tracing::warn!(sink = index, tick = self.ticks, "{err}");
            }
        }
        &self.frame
    }

    /// Tick forever at the scheduler's pace.
    pub fn run(&mut self, scheduler: &mut impl TickScheduler) -> ! {
        tracing::info!(sinks = self.sinks.len(), "game loop started");
        loop {
            self.step();
            scheduler.wait_for_next_tick();
        }
    }
}
