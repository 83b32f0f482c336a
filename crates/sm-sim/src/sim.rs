//! The `Simulation` struct and its tick loop.

use sm_agent::AgentStore;
use sm_core::{RunConfig, SimClock, SimulationConfig, Tick};
use sm_field::FieldBuffer;
use sm_steer::{UpdateContext, run_agent_stage};
use tracing::{Level, debug, info, warn};

use crate::{LoopState, RenderSnapshot, SimError, SimObserver, SimResult, StopHandle};

/// Storage that exists only while the simulation is `Ready` or `Running`.
struct World {
    agents: AgentStore,
    field:  FieldBuffer,
}

/// How a call to [`Simulation::run`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Ticks completed by this call.
    pub ticks_run:  u64,
    /// `true` if a [`StopHandle`] cut the run short.
    pub stopped:    bool,
    /// Clock position after the run.
    pub final_tick: Tick,
}

/// The simulation runner.
///
/// Owns the configuration, the agent population, and the double-buffered
/// trail field, and moves them through the [`LoopState`] lifecycle.  An
/// external driver calls [`step`](Self::step) once per frame, or hands
/// control to [`run`](Self::run) with a [`SimObserver`].
///
/// Build directly with [`Simulation::new`] + `configure` + `initialize`, or
/// via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    state:  LoopState,
    config: Option<SimulationConfig>,
    seed:   u64,
    clock:  SimClock,
    world:  Option<World>,
    stop:   StopHandle,

    decay_clamp_warned: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// An unconfigured simulation with no storage.
    pub fn new() -> Self {
        Self {
            state:  LoopState::Uninitialized,
            config: None,
            seed:   0,
            clock:  SimClock::new(),
            world:  None,
            stop:   StopHandle::new(),

            decay_clamp_warned: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn config(&self) -> Option<&SimulationConfig> {
        self.config.as_ref()
    }

    /// Seed passed to `initialize`.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The population, while `Ready` or `Running`.
    pub fn agents(&self) -> Option<&AgentStore> {
        self.world.as_ref().map(|w| &w.agents)
    }

    /// The trail field, while `Ready` or `Running`.
    pub fn field(&self) -> Option<&FieldBuffer> {
        self.world.as_ref().map(|w| &w.field)
    }

    /// Mutable field access between ticks, e.g. to seed food sources.
    pub fn field_mut(&mut self) -> Option<&mut FieldBuffer> {
        self.world.as_mut().map(|w| &mut w.field)
    }

    /// A handle that stops [`run`](Self::run) at the next tick boundary.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// The current agents and field without advancing.
    pub fn snapshot(&self) -> Option<RenderSnapshot<'_>> {
        let world = self.world.as_ref()?;
        Some(RenderSnapshot {
            tick:    self.clock.current_tick,
            elapsed: self.clock.elapsed,
            agents:  &world.agents,
            field:   world.field.current(),
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Validate and store the configuration.  Only allowed before
    /// `initialize`.
    pub fn configure(&mut self, config: SimulationConfig) -> SimResult<()> {
        self.require("configure", LoopState::Uninitialized)?;
        config.validate()?;
        info!(
            width  = config.width,
            height = config.height,
            agents = config.agent_count,
            "simulation configured"
        );
        self.config = Some(config);
        Ok(())
    }

    /// Allocate a randomly initialized population and an empty field.
    ///
    /// On failure nothing is retained and the state stays `Uninitialized`.
    pub fn initialize(&mut self, seed: u64) -> SimResult<LoopState> {
        self.require("initialize", LoopState::Uninitialized)?;
        let config = self.config.as_ref().ok_or(SimError::NotConfigured)?;
        let agents = AgentStore::initialize(config, seed)?;
        self.install(seed, agents)
    }

    /// Like [`initialize`](Self::initialize) with an explicit population.
    pub(crate) fn install(&mut self, seed: u64, agents: AgentStore) -> SimResult<LoopState> {
        self.require("initialize", LoopState::Uninitialized)?;
        let config = self.config.as_ref().ok_or(SimError::NotConfigured)?;
        if agents.count != config.agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: config.agent_count,
                got:      agents.count,
            });
        }
        let field = FieldBuffer::new(config.dims())?;
        info!(
            seed,
            agents = agents.count,
            width  = config.width,
            height = config.height,
            "simulation initialized"
        );

        self.world = Some(World { agents, field });
        self.seed = seed;
        self.clock = SimClock::new();
        self.state = LoopState::Ready;
        Ok(self.state)
    }

    /// Enter `Running`.  A no-op if already running.
    pub fn start(&mut self) -> SimResult<()> {
        match self.state {
            LoopState::Ready => {
                self.state = LoopState::Running;
                info!(tick = self.clock.current_tick.0, "simulation started");
                Ok(())
            }
            LoopState::Running => Ok(()),
            state => Err(SimError::InvalidState { op: "start", state }),
        }
    }

    /// Release all agent and field storage and enter `Stopped`.  Idempotent.
    pub fn shutdown(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.world = None;
        self.state = LoopState::Stopped;
        info!(tick = self.clock.current_tick.0, "simulation shut down");
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one tick of length `dt` and return the result.
    ///
    /// Starts the simulation if it is `Ready`.  Once running with a valid
    /// `dt`, a tick cannot fail.
    pub fn step(&mut self, dt: f32) -> SimResult<RenderSnapshot<'_>> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidTimeStep(dt));
        }
        if self.state == LoopState::Ready {
            self.start()?;
        }
        self.require("step", LoopState::Running)?;

        let state = self.state;
        let (Some(config), Some(world)) = (self.config.as_ref(), self.world.as_mut()) else {
            return Err(SimError::InvalidState { op: "step", state });
        };

        if config.decay_rate * dt > 1.0 && !self.decay_clamp_warned {
            warn!(
                decay_rate = config.decay_rate,
                dt,
                "decay_rate * dt exceeds 1; the field is cleared every tick"
            );
            self.decay_clamp_warned = true;
        }

        // ① Agent stage.  `ctx` holds `&world.field` until the block ends.
        {
            let ctx = UpdateContext::new(&world.field, config, self.clock.current_tick, self.seed, dt);
            run_agent_stage(&mut world.agents, &ctx);
        }

        // ② Field evolution + swap.
        world.field.evolve(config, dt);
        self.clock.advance(dt);

        // ③ Snapshot.
        let snapshot = RenderSnapshot {
            tick:    self.clock.current_tick,
            elapsed: self.clock.elapsed,
            agents:  &world.agents,
            field:   world.field.current(),
        };
        if tracing::enabled!(Level::DEBUG) {
            let stats = snapshot.stats();
            debug!(
                tick          = stats.tick.0,
                total_density = stats.total_density,
                max_density   = stats.max_density,
                "tick complete"
            );
        }
        Ok(snapshot)
    }

    /// Run until the clock reaches `run.end_tick()`, or a stop is requested.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, run: &RunConfig, observer: &mut O) -> SimResult<RunOutcome> {
        let remaining = run.end_tick().0.saturating_sub(self.clock.current_tick.0);
        self.drive(remaining, run.dt, run.output_interval_ticks, observer)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`),
    /// or fewer if a stop is requested.
    pub fn run_ticks<O: SimObserver>(
        &mut self,
        n:        u64,
        run:      &RunConfig,
        observer: &mut O,
    ) -> SimResult<RunOutcome> {
        self.drive(n, run.dt, run.output_interval_ticks, observer)
    }

    fn drive<O: SimObserver>(
        &mut self,
        n:        u64,
        dt:       f32,
        interval: u64,
        observer: &mut O,
    ) -> SimResult<RunOutcome> {
        self.start()?;

        let mut ticks_run = 0;
        let mut stopped = false;
        while ticks_run < n {
            if self.stop.is_stop_requested() {
                info!(tick = self.clock.current_tick.0, "stop requested; halting between ticks");
                stopped = true;
                break;
            }

            observer.on_tick_start(self.clock.current_tick);
            let snapshot = self.step(dt)?;
            observer.on_tick_end(&snapshot.stats());
            if interval > 0 && snapshot.tick.0 % interval == 0 {
                observer.on_snapshot(&snapshot);
            }
            ticks_run += 1;
        }

        let final_tick = self.clock.current_tick;
        observer.on_sim_end(final_tick);
        Ok(RunOutcome { ticks_run, stopped, final_tick })
    }

    fn require(&self, op: &'static str, expected: LoopState) -> SimResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SimError::InvalidState { op, state: self.state })
        }
    }
}
