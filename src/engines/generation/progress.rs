use super::evolution_engine::ProgressCallback;
use std::sync::mpsc::Sender;

/// Logs a summary every `every` generations
pub struct ConsoleProgressCallback {
    every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1) }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, generation: usize, generation_best: i64, best_ever: i64) {
        if (generation + 1) % self.every == 0 {
            log::info!(
                "Generation {} complete. Best this generation: {}, best ever: {}",
                generation + 1,
                generation_best,
                best_ever
            );
        }
    }

    fn on_new_best(&mut self, _generation: usize, _score: i64) {}
}

/// Progress events for a listener on another thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, generation_best: i64, best_ever: i64 },
    NewBest { generation: usize, score: i64 },
}

pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

// A dropped receiver just means nobody is listening any more.
impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, generation_best: i64, best_ever: i64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            generation_best,
            best_ever,
        });
    }

    fn on_new_best(&mut self, generation: usize, score: i64) {
        let _ = self.sender.send(ProgressMessage::NewBest { generation, score });
    }
}
