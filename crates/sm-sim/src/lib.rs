//! `sm-sim` — the simulation loop.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──configure──▶ Uninitialized ──initialize(seed)──▶ Ready
//!       Ready ──start / step──▶ Running ──step──▶ Running
//!         any ──shutdown──▶ Stopped   (terminal; storage released)
//! ```
//!
//! # One tick
//!
//! ```text
//! ① Agent stage   — every agent senses the current field, turns, moves, and
//!                   deposits (parallel with the `parallel` feature).
//!   ── barrier: the stage borrows the field immutably; evolve needs &mut ──
//! ② Evolve        — commit deposits, decay + diffuse every cell into the
//!                   next buffer (parallel), swap buffers.
//! ③ Snapshot      — agent list + read-only current field for the renderer.
//! ```
//!
//! A [`StopHandle`] requested from another thread is honored at the top of
//! the next tick; a tick in progress always completes.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Both stages run on Rayon's thread pool.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sm_core::{RunConfig, SimulationConfig};
//! use sm_sim::{NoopObserver, Simulation};
//!
//! let mut sim = Simulation::new();
//! sim.configure(SimulationConfig::default())?;
//! sim.initialize(42)?;
//! let snapshot = sim.step(0.02)?;
//! println!("{} agents", snapshot.agents.count);
//! sim.run(&RunConfig::default(), &mut NoopObserver)?;
//! sim.shutdown();
//! ```

pub mod builder;
pub mod control;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod state;


pub use builder::SimBuilder;
pub use control::StopHandle;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunOutcome, Simulation};
pub use snapshot::{RenderSnapshot, TickStats};
pub use state::LoopState;
