//! Unit tests for sm-steer.

#[cfg(test)]
use sm_agent::Agent;
#[cfg(test)]
use sm_core::{Rgba, SimulationConfig, Vec2};

#[cfg(test)]
fn test_config() -> SimulationConfig {
    SimulationConfig {
        width:         32,
        height:        32,
        agent_count:   1,
        move_speed:    0.0,
        turn_speed:    0.5,
        sensor_angle:  std::f32::consts::FRAC_PI_4,
        sensor_offset: 4.0,
        sensor_radius: 0,
        decay_rate:    0.0,
        diffuse_rate:  0.0,
        ..SimulationConfig::default()
    }
}

#[cfg(test)]
fn agent_at(x: f32, y: f32, heading: f32) -> Agent {
    Agent::new(Vec2::new(x, y), heading, Rgba::WHITE)
}

#[cfg(test)]
mod decide {
    use crate::{SensorReading, Turn, decide};

    fn reading(left: f32, center: f32, right: f32) -> SensorReading {
        SensorReading { left, center, right }
    }

    fn no_tie_break() -> bool {
        panic!("tie-break must not be consulted")
    }

    #[test]
    fn center_strictly_greatest_goes_straight() {
        assert_eq!(decide(reading(1.0, 2.0, 1.5), no_tie_break), Turn::Straight);
    }

    #[test]
    fn left_greater_turns_left() {
        assert_eq!(decide(reading(3.0, 1.0, 2.0), no_tie_break), Turn::Left);
    }

    #[test]
    fn right_greater_turns_right() {
        assert_eq!(decide(reading(0.0, 1.0, 2.0), no_tie_break), Turn::Right);
    }

    #[test]
    fn center_tied_with_left_is_not_straight() {
        assert_eq!(decide(reading(2.0, 2.0, 1.0), no_tie_break), Turn::Left);
    }

    #[test]
    fn symmetric_sides_use_tie_break() {
        assert_eq!(decide(reading(2.0, 1.0, 2.0), || true), Turn::Right);
        assert_eq!(decide(reading(2.0, 1.0, 2.0), || false), Turn::Left);
    }

    #[test]
    fn flat_field_goes_straight() {
        assert_eq!(decide(reading(0.0, 0.0, 0.0), no_tie_break), Turn::Straight);
    }

    #[test]
    fn delta_sign_convention() {
        assert_eq!(Turn::Left.delta(0.25), -0.25);
        assert_eq!(Turn::Right.delta(0.25), 0.25);
        assert_eq!(Turn::Straight.delta(0.25), 0.0);
    }
}

#[cfg(test)]
mod sensing {
    use super::*;
    use sm_field::FieldBuffer;

    use crate::{sense, sensor_sites};

    #[test]
    fn sites_follow_heading() {
        let cfg = test_config();
        let sites = sensor_sites(&cfg, Vec2::new(16.0, 16.0), 0.0);
        assert_eq!(sites.center, (20, 16));
        // 4·cos(π/4) ≈ 2.83 → cell 18; 4·sin(±π/4) ≈ ±2.83 → cells 13 / 18.
        assert_eq!(sites.left, (18, 13));
        assert_eq!(sites.right, (18, 18));
    }

    #[test]
    fn sites_wrap_across_edges() {
        let cfg = test_config();
        let sites = sensor_sites(&cfg, Vec2::new(30.5, 1.0), 0.0);
        assert_eq!(sites.center, (2, 1));
    }

    #[test]
    fn radius_sums_square_neighborhood() {
        let cfg = SimulationConfig { sensor_radius: 1, ..test_config() };
        let mut field = FieldBuffer::new(cfg.dims()).unwrap();
        for y in 0..32 {
            for x in 0..32 {
                field.current_mut().set(x, y, 1.0);
            }
        }
        let r = sense(&field, &cfg, Vec2::new(16.0, 16.0), 0.0);
        assert_eq!(r.left, 9.0);
        assert_eq!(r.center, 9.0);
        assert_eq!(r.right, 9.0);
    }

    #[test]
    fn pending_deposits_are_not_sensed() {
        let cfg = test_config();
        let field = FieldBuffer::new(cfg.dims()).unwrap();
        field.deposit(20, 16, 5.0);
        let r = sense(&field, &cfg, Vec2::new(16.0, 16.0), 0.0);
        assert_eq!(r.center, 0.0);
    }
}

#[cfg(test)]
mod update {
    use super::*;
    use sm_core::{AgentId, Tick};
    use sm_field::FieldBuffer;

    use crate::{Turn, UpdateContext, sensor_sites, update_agent};

    const HEADING: f32 = 1.0;

    /// Field with `value` under the chosen sensors of an agent at (16, 16)
    /// facing `HEADING`.
    fn field_with(cfg: &SimulationConfig, left: f32, center: f32, right: f32) -> FieldBuffer {
        let mut field = FieldBuffer::new(cfg.dims()).unwrap();
        let sites = sensor_sites(cfg, Vec2::new(16.0, 16.0), HEADING);
        for ((x, y), v) in [(sites.left, left), (sites.center, center), (sites.right, right)] {
            field.current_mut().set(x as i64, y as i64, v);
        }
        field
    }

    #[test]
    fn left_strongest_decreases_heading_by_turn_step() {
        let cfg = test_config();
        let field = field_with(&cfg, 5.0, 1.0, 0.0);
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 0.5);
        let step = update_agent(&ctx, AgentId(0), agent_at(16.0, 16.0, HEADING));
        assert_eq!(step.turn, Turn::Left);
        assert_eq!(step.agent.heading, HEADING - 0.25);
    }

    #[test]
    fn right_strongest_increases_heading_by_turn_step() {
        let cfg = test_config();
        let field = field_with(&cfg, 0.0, 1.0, 5.0);
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 0.5);
        let step = update_agent(&ctx, AgentId(0), agent_at(16.0, 16.0, HEADING));
        assert_eq!(step.turn, Turn::Right);
        assert_eq!(step.agent.heading, HEADING + 0.25);
    }

    #[test]
    fn center_strongest_keeps_heading() {
        let cfg = test_config();
        let field = field_with(&cfg, 1.0, 5.0, 1.0);
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 0.5);
        let step = update_agent(&ctx, AgentId(0), agent_at(16.0, 16.0, HEADING));
        assert_eq!(step.turn, Turn::Straight);
        assert_eq!(step.agent.heading, HEADING);
    }

    #[test]
    fn tie_break_is_reproducible() {
        let cfg = test_config();
        let field = field_with(&cfg, 3.0, 0.0, 3.0);
        let ctx = UpdateContext::new(&field, &cfg, Tick(4), 77, 0.5);
        let a = update_agent(&ctx, AgentId(9), agent_at(16.0, 16.0, HEADING));
        let b = update_agent(&ctx, AgentId(9), agent_at(16.0, 16.0, HEADING));
        assert_ne!(a.turn, Turn::Straight);
        assert_eq!(a, b);
    }

    #[test]
    fn tie_break_goes_both_ways_across_agents() {
        let cfg = test_config();
        let field = field_with(&cfg, 3.0, 0.0, 3.0);
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 5, 0.5);
        let turns: Vec<Turn> = (0..64)
            .map(|i| update_agent(&ctx, AgentId(i), agent_at(16.0, 16.0, HEADING)).turn)
            .collect();
        assert!(turns.contains(&Turn::Left));
        assert!(turns.contains(&Turn::Right));
    }

    #[test]
    fn moves_along_new_heading_and_deposits_there() {
        let cfg = SimulationConfig { move_speed: 2.0, ..test_config() };
        let field = FieldBuffer::new(cfg.dims()).unwrap();
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 1.0);
        let step = update_agent(&ctx, AgentId(0), agent_at(5.5, 5.5, 0.0));
        assert_eq!(step.agent.position, Vec2::new(7.5, 5.5));
        assert_eq!((step.deposit.x, step.deposit.y), (7, 5));
        assert_eq!(step.deposit.amount, 1.0);
    }

    #[test]
    fn wraps_in_every_direction() {
        let cfg = SimulationConfig { move_speed: 2.0, turn_speed: 0.0, ..test_config() };
        let field = FieldBuffer::new(cfg.dims()).unwrap();
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 1.0);
        let cases = [
            (agent_at(31.0, 10.0, 0.0), (1.0, 10.0)),
            (agent_at(1.0, 10.0, std::f32::consts::PI), (31.0, 10.0)),
            (agent_at(10.0, 31.0, std::f32::consts::FRAC_PI_2), (10.0, 1.0)),
            (agent_at(10.0, 1.0, 3.0 * std::f32::consts::FRAC_PI_2), (10.0, 31.0)),
        ];
        for (agent, (ex, ey)) in cases {
            let p = update_agent(&ctx, AgentId(0), agent).agent.position;
            assert!((p.x - ex).abs() < 1e-4 && (p.y - ey).abs() < 1e-4, "{agent:?} -> {p}");
            assert!((0.0..32.0).contains(&p.x) && (0.0..32.0).contains(&p.y));
        }
    }

    #[test]
    fn color_carried_through() {
        let cfg = test_config();
        let field = FieldBuffer::new(cfg.dims()).unwrap();
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 1.0);
        let mut agent = agent_at(3.0, 3.0, 0.0);
        agent.color = Rgba::opaque(0.1, 0.2, 0.3);
        assert_eq!(update_agent(&ctx, AgentId(0), agent).agent.color, agent.color);
    }
}

#[cfg(test)]
mod stage {
    use super::*;
    use sm_agent::AgentStore;
    use sm_core::Tick;
    use sm_field::FieldBuffer;

    use crate::{UpdateContext, run_agent_stage};

    #[test]
    fn every_agent_deposits_once() {
        let cfg = SimulationConfig { move_speed: 1.0, turn_speed: 0.0, ..test_config() };
        let field = FieldBuffer::new(cfg.dims()).unwrap();
        let mut agents = AgentStore::from_agents(&[
            agent_at(5.0, 5.0, 0.0),
            agent_at(20.0, 9.0, 0.0),
        ])
        .unwrap();
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 1.0);
        run_agent_stage(&mut agents, &ctx);

        assert_eq!(agents.positions()[0], Vec2::new(6.0, 5.0));
        assert_eq!(field.pending(6, 5), 1.0);
        assert_eq!(field.pending(21, 9), 1.0);
    }

    #[test]
    fn two_agents_same_cell_sum() {
        let cfg = SimulationConfig { move_speed: 1.0, turn_speed: 0.0, ..test_config() };
        let field = FieldBuffer::new(cfg.dims()).unwrap();
        let mut agents = AgentStore::from_agents(&[
            agent_at(5.0, 5.0, 0.0),
            agent_at(5.5, 5.5, 0.0),
        ])
        .unwrap();
        let ctx = UpdateContext::new(&field, &cfg, Tick(0), 1, 1.0);
        run_agent_stage(&mut agents, &ctx);
        assert_eq!(field.pending(6, 5), 2.0);
    }

    #[test]
    fn stage_matches_sequential_reference() {
        use sm_agent::AgentStoreBuilder;

        use crate::update_agent;

        let cfg = SimulationConfig { agent_count: 500, move_speed: 2.0, ..test_config() };
        let seeded_field = || {
            let mut field = FieldBuffer::new(cfg.dims()).unwrap();
            for i in 0..200_i64 {
                field.deposit(i * 7, i * 3, (i % 5) as f32);
            }
            field.evolve(&cfg, 0.0);
            field
        };
        let population = || AgentStoreBuilder::new(cfg.agent_count, 99).dims(cfg.dims()).build().unwrap();

        let staged_field = seeded_field();
        let mut staged = population();
        run_agent_stage(&mut staged, &UpdateContext::new(&staged_field, &cfg, Tick(4), 7, 0.5));

        let reference_field = seeded_field();
        let mut reference = population();
        let ctx = UpdateContext::new(&reference_field, &cfg, Tick(4), 7, 0.5);
        reference.for_each(|id, agent| {
            let step = update_agent(&ctx, id, agent);
            reference_field.deposit(step.deposit.x as i64, step.deposit.y as i64, step.deposit.amount);
            step.agent
        });

        assert_eq!(staged.positions(), reference.positions());
        assert_eq!(staged.headings(), reference.headings());
        for y in 0..cfg.height as i64 {
            for x in 0..cfg.width as i64 {
                assert_eq!(staged_field.pending(x, y), reference_field.pending(x, y));
            }
        }
    }
}
