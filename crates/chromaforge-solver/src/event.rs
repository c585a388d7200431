//! Event system for solver monitoring and extensibility.
//!
//! Event listeners can be registered to receive notifications about the
//! solve lifecycle.
//!
//! # Event Types
//!
//! - **Solver Events**: solving started, solution improved, search stopped
//! - **Decision Events**: decision made, decision undone
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use chromaforge_solver::event::{SolverEventListener, SolverEventSupport};
//!
//! #[derive(Debug)]
//! struct MyListener;
//! impl SolverEventListener for MyListener {
//!     fn on_solution_improved(&self, _colors: &[usize], color_count: usize) {
//!         println!("New best: {} colors", color_count);
//!     }
//! }
//!
//! let mut support = SolverEventSupport::new();
//! support.add_solver_listener(Arc::new(MyListener));
//! assert!(support.has_listeners());
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use chromaforge_core::{Color, ColoringResult, Graph, VertexId};

use crate::search::SearchStatus;

/// Listener for solver-level events.
pub trait SolverEventListener: Send + Sync + Debug {
    /// Called when a strictly better coloring is found.
    ///
    /// # Arguments
    ///
    /// * `colors` - The new incumbent, one color per vertex
    /// * `color_count` - Number of distinct colors it uses
    fn on_solution_improved(&self, colors: &[Color], color_count: usize);

    /// Called when solving starts.
    fn on_solving_started(&self, _graph: &Graph) {}

    /// Called once the search has stopped, with the extracted result.
    fn on_search_stopped(&self, _status: &SearchStatus, _result: &ColoringResult) {}
}

/// Listener for individual search decisions.
///
/// Fired on the hot path; keep implementations cheap.
pub trait DecisionListener: Send + Sync + Debug {
    /// Called after `vertex := color` survived propagation at `depth`.
    fn on_decision_made(&self, vertex: VertexId, color: Color, depth: usize);

    /// Called when the decision on `vertex` is undone.
    fn on_decision_undone(&self, _vertex: VertexId, _depth: usize) {}
}

/// Central event broadcaster for solver events.
///
/// All listener methods are called synchronously in registration order.
#[derive(Default, Clone)]
pub struct SolverEventSupport {
    solver_listeners: Vec<Arc<dyn SolverEventListener>>,
    decision_listeners: Vec<Arc<dyn DecisionListener>>,
}

impl SolverEventSupport {
    /// Creates a new event support instance.
    pub fn new() -> Self {
        Self::default()
    }

    // === Listener Registration ===

    /// Adds a solver-level event listener.
    pub fn add_solver_listener(&mut self, listener: Arc<dyn SolverEventListener>) {
        self.solver_listeners.push(listener);
    }

    /// Adds a decision listener.
    pub fn add_decision_listener(&mut self, listener: Arc<dyn DecisionListener>) {
        self.decision_listeners.push(listener);
    }

    /// Removes all listeners.
    pub fn clear_listeners(&mut self) {
        self.solver_listeners.clear();
        self.decision_listeners.clear();
    }

    // === Event Firing ===

    pub fn fire_solving_started(&self, graph: &Graph) {
        for listener in &self.solver_listeners {
            listener.on_solving_started(graph);
        }
    }

    pub fn fire_solution_improved(&self, colors: &[Color], color_count: usize) {
        for listener in &self.solver_listeners {
            listener.on_solution_improved(colors, color_count);
        }
    }

    pub fn fire_search_stopped(&self, status: &SearchStatus, result: &ColoringResult) {
        for listener in &self.solver_listeners {
            listener.on_search_stopped(status, result);
        }
    }

    pub fn fire_decision_made(&self, vertex: VertexId, color: Color, depth: usize) {
        for listener in &self.decision_listeners {
            listener.on_decision_made(vertex, color, depth);
        }
    }

    pub fn fire_decision_undone(&self, vertex: VertexId, depth: usize) {
        for listener in &self.decision_listeners {
            listener.on_decision_undone(vertex, depth);
        }
    }

    // === Query Methods ===

    pub fn solver_listener_count(&self) -> usize {
        self.solver_listeners.len()
    }

    pub fn decision_listener_count(&self) -> usize {
        self.decision_listeners.len()
    }

    /// Returns true if there are any decision listeners registered.
    pub fn has_decision_listeners(&self) -> bool {
        !self.decision_listeners.is_empty()
    }

    /// Returns true if there are any listeners registered.
    pub fn has_listeners(&self) -> bool {
        !self.solver_listeners.is_empty() || !self.decision_listeners.is_empty()
    }
}

impl Debug for SolverEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverEventSupport")
            .field("solver_listeners", &self.solver_listeners.len())
            .field("decision_listeners", &self.decision_listeners.len())
            .finish()
    }
}

/// A listener that reports events through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventListener {
    /// Prefix for log messages.
    prefix: String,
}

impl LoggingEventListener {
    /// Creates a new logging listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logging listener with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl SolverEventListener for LoggingEventListener {
    fn on_solution_improved(&self, _colors: &[Color], color_count: usize) {
        info!("{}[Event] New best coloring with {} colors", self.prefix, color_count);
    }

    fn on_solving_started(&self, graph: &Graph) {
        info!(
            "{}[Event] Solving started ({} vertices, {} edges)",
            self.prefix,
            graph.vertex_count(),
            graph.edge_count()
        );
    }

    fn on_search_stopped(&self, status: &SearchStatus, result: &ColoringResult) {
        info!(
            "{}[Event] Search stopped ({}) with {} colors",
            self.prefix, status, result.color_count
        );
    }
}

/// A counting listener that tracks event occurrences.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    improved_count: AtomicUsize,
    solving_started_count: AtomicUsize,
    search_stopped_count: AtomicUsize,
    decision_count: AtomicUsize,
    undone_count: AtomicUsize,
    last_color_count: AtomicUsize,
}

impl CountingEventListener {
    /// Creates a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn improved_count(&self) -> usize {
        self.improved_count.load(Ordering::SeqCst)
    }

    pub fn solving_started_count(&self) -> usize {
        self.solving_started_count.load(Ordering::SeqCst)
    }

    pub fn search_stopped_count(&self) -> usize {
        self.search_stopped_count.load(Ordering::SeqCst)
    }

    pub fn decision_count(&self) -> usize {
        self.decision_count.load(Ordering::SeqCst)
    }

    pub fn undone_count(&self) -> usize {
        self.undone_count.load(Ordering::SeqCst)
    }

    /// Color count of the last improvement seen.
    pub fn last_color_count(&self) -> usize {
        self.last_color_count.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.improved_count.store(0, Ordering::SeqCst);
        self.solving_started_count.store(0, Ordering::SeqCst);
        self.search_stopped_count.store(0, Ordering::SeqCst);
        self.decision_count.store(0, Ordering::SeqCst);
        self.undone_count.store(0, Ordering::SeqCst);
        self.last_color_count.store(0, Ordering::SeqCst);
    }
}

impl SolverEventListener for CountingEventListener {
    fn on_solution_improved(&self, _colors: &[Color], color_count: usize) {
        self.improved_count.fetch_add(1, Ordering::SeqCst);
        self.last_color_count.store(color_count, Ordering::SeqCst);
    }

    fn on_solving_started(&self, _graph: &Graph) {
        self.solving_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_search_stopped(&self, _status: &SearchStatus, _result: &ColoringResult) {
        self.search_stopped_count.fetch_add(1, Ordering::SeqCst);
    }
}

impl DecisionListener for CountingEventListener {
    fn on_decision_made(&self, _vertex: VertexId, _color: Color, _depth: usize) {
        self.decision_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_decision_undone(&self, _vertex: VertexId, _depth: usize) {
        self.undone_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// An improved coloring streamed by [`ChannelEventListener`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovedSolution {
    pub color_count: usize,
    pub colors: Vec<Color>,
}

/// Streams each improved coloring into an unbounded tokio channel.
///
/// Sending never blocks the search; once the receiver is dropped further
/// improvements are discarded.
///
/// # Example
///
/// ```
/// use chromaforge_solver::event::{ChannelEventListener, SolverEventListener};
///
/// let (listener, mut rx) = ChannelEventListener::channel();
/// listener.on_solution_improved(&[0, 1, 0], 2);
///
/// let update = rx.try_recv().unwrap();
/// assert_eq!(update.color_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelEventListener {
    sender: mpsc::UnboundedSender<ImprovedSolution>,
}

impl ChannelEventListener {
    /// Creates the listener together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ImprovedSolution>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl SolverEventListener for ChannelEventListener {
    fn on_solution_improved(&self, colors: &[Color], color_count: usize) {
        let _ = self.sender.send(ImprovedSolution {
            color_count,
            colors: colors.to_vec(),
        });
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
