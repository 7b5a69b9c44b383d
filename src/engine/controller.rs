//! Engine controller implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::EngineError;
use crate::board::{find_best_move, GameState, Move, NodeCounters, SearchConfig, SearchResult};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A search running on its own thread.
pub struct SearchJob {
    /// Stop flag checked by the search between sibling moves
    pub stop: Arc<AtomicBool>,
    /// Handle to the search thread
    handle: JoinHandle<()>,
    /// One-shot result channel
    receiver: Receiver<SearchResult>,
}

impl SearchJob {
    /// Stop the search and wait for the thread to finish. Any result is dropped.
    pub fn stop_and_wait(self) {
        self.signal_stop();
        if self.handle.join().is_err() {
            warn!("search thread panicked");
        }
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn finish(self) {
        if self.handle.join().is_err() {
            warn!("search thread panicked");
        }
    }
}

/// Owns the live game and at most one background search.
///
/// The worker searches a clone of the position, so the controller's own
/// state is never shared. Playing, undoing or resetting while a search is
/// outstanding cancels it and discards its result.
pub struct EngineController {
    state: GameState,
    legal_moves: Vec<Move>,
    config: SearchConfig,
    rng: StdRng,
    current_job: Option<SearchJob>,
    counters: Arc<Mutex<NodeCounters>>,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineController {
    /// Controller at the initial position with the default search config
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_state(GameState::new(), config)
    }

    /// Controller starting from an arbitrary position
    #[must_use]
    pub fn with_state(mut state: GameState, config: SearchConfig) -> Self {
        let legal_moves = state.generate_moves();
        EngineController {
            state,
            legal_moves,
            config,
            rng: Self::make_rng(&config),
            current_job: None,
            counters: Arc::new(Mutex::new(NodeCounters::new())),
        }
    }

    fn make_rng(config: &SearchConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal moves of the current position
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the search config. A config carrying a seed also reseeds the RNG.
    pub fn set_config(&mut self, config: SearchConfig) {
        if config.seed.is_some() {
            self.rng = Self::make_rng(&config);
        }
        self.config = config;
    }

    /// Snapshot of the per-strategy node counters
    #[must_use]
    pub fn node_counters(&self) -> NodeCounters {
        *self.counters.lock()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.legal_moves.is_empty()
    }

    /// Check if there's an active search
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    fn refresh_legal_moves(&mut self) {
        self.legal_moves = self.state.generate_moves();
    }

    /// Play a move from the current legal set.
    pub fn play_move(&mut self, mv: Move) -> Result<(), EngineError> {
        self.cancel_search();
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        let Some(legal) = self.legal_moves.iter().find(|m| **m == mv).copied() else {
            return Err(EngineError::IllegalMove {
                notation: mv.to_string(),
            });
        };
        self.state.make_move(&legal);
        self.refresh_legal_moves();
        debug!("played {legal}");
        Ok(())
    }

    /// Play a move given in coordinate notation ("e2e4").
    pub fn play_notation(&mut self, notation: &str) -> Result<Move, EngineError> {
        self.cancel_search();
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        let mv = self.state.parse_move(notation)?;
        self.play_move(mv)?;
        Ok(mv)
    }

    /// Take back the last move. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.cancel_search();
        let undone = self.state.undo_move();
        self.refresh_legal_moves();
        undone
    }

    /// Start a new game from the initial position.
    pub fn reset(&mut self) {
        self.cancel_search();
        self.state.reset();
        self.refresh_legal_moves();
    }

    /// Start searching the current position on a worker thread.
    ///
    /// Returns immediately; collect the result with `poll_search` or
    /// `wait_for_search`.
    pub fn start_search(&mut self) -> Result<(), EngineError> {
        if self.current_job.is_some() {
            return Err(EngineError::SearchInProgress);
        }
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }

        let stop = Arc::new(AtomicBool::new(false));
        let (tx, receiver) = mpsc::channel();

        let mut search_state = self.state.clone();
        let legal_moves = self.legal_moves.clone();
        let config = self.config;
        let seed: u64 = self.rng.gen();
        let stop_clone = Arc::clone(&stop);
        let counters = Arc::clone(&self.counters);

        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let result =
                    find_best_move(&mut search_state, &legal_moves, &config, &mut rng, &stop_clone);
                if stop_clone.load(Ordering::Relaxed) {
                    return;
                }
                counters.lock().record(&result);
                // The receiver is gone only if the job was dropped.
                let _ = tx.send(result);
            })
            .map_err(|e| EngineError::WorkerSpawn {
                reason: e.to_string(),
            })?;

        info!(
            "search started: {} depth {}",
            self.config.strategy, self.config.depth
        );
        self.current_job = Some(SearchJob {
            stop,
            handle,
            receiver,
        });
        Ok(())
    }

    /// Non-blocking check for a finished search.
    pub fn poll_search(&mut self) -> Option<SearchResult> {
        let job = self.current_job.as_ref()?;
        match job.receiver.try_recv() {
            Ok(result) => {
                self.finish_job();
                info!("search finished: {} nodes", result.nodes);
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("search worker exited without a result");
                self.finish_job();
                None
            }
        }
    }

    /// Block until the running search finishes. `None` if no search was running.
    pub fn wait_for_search(&mut self) -> Option<SearchResult> {
        let job = self.current_job.take()?;
        let result = job.receiver.recv().ok();
        job.finish();
        if let Some(r) = &result {
            info!("search finished: {} nodes", r.nodes);
        } else {
            warn!("search worker exited without a result");
        }
        result
    }

    /// Search the current position and play the chosen move.
    pub fn play_best_move(&mut self) -> Result<SearchResult, EngineError> {
        self.start_search()?;
        let result = self.wait_for_search().ok_or(EngineError::GameOver)?;
        let mv = result.best_move.ok_or(EngineError::GameOver)?;
        self.play_move(mv)?;
        Ok(result)
    }

    /// Raise the stop flag of the running search, if any, and join its
    /// worker. The result is discarded.
    pub fn cancel_search(&mut self) -> bool {
        let Some(job) = self.current_job.take() else {
            return false;
        };
        job.stop_and_wait();
        info!("search cancelled");
        true
    }

    fn finish_job(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.finish();
        }
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.cancel_search();
    }
}
