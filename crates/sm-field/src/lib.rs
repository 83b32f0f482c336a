//! `sm-field` — the scalar trail-density grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`trail`]     | `TrailField` — one `width × height` grid of densities       |
//! | [`deposit`]   | `DepositLayer` — lock-free additive accumulator             |
//! | [`evolve`]    | `EvolveParams`, the per-cell decay + diffusion kernel       |
//! | [`buffer`]    | `FieldBuffer` — current/next fields plus the deposit layer  |
//!
//! # Buffer discipline
//!
//! ```text
//! agent stage   reads  current          writes deposits (atomic add)
//!               ── barrier ──
//! evolve        commit deposits into current, zero deposits
//!               reads  current          writes next (every cell)
//!               ── barrier ──
//! swap          current <-> next        (ownership moves, nothing copied)
//! ```
//!
//! Reads during a tick always see the previous tick's field; no cell's
//! evolution depends on the order in which cells are visited.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                         |
//! |------------|------------------------------------------------|
//! | `parallel` | Commit and evolve passes run on Rayon.         |

pub mod buffer;
pub mod deposit;
pub mod evolve;
pub mod trail;


pub use buffer::FieldBuffer;
pub use deposit::DepositLayer;
pub use evolve::EvolveParams;
pub use trail::TrailField;
