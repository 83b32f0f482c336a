//! Unit tests for sm-agent.

#[cfg(test)]
mod builder {
    use std::f32::consts::TAU;

    use sm_core::{GridDims, ResourceError, SimulationConfig};

    use crate::{AgentStore, AgentStoreBuilder};

    #[test]
    fn builds_requested_count() {
        let store = AgentStoreBuilder::new(100, 42).dims(GridDims::new(32, 16)).build().unwrap();
        assert_eq!(store.count, 100);
        assert_eq!(store.positions().len(), 100);
        assert_eq!(store.headings().len(), 100);
        assert_eq!(store.colors().len(), 100);
    }

    #[test]
    fn initial_state_in_range() {
        let store = AgentStoreBuilder::new(500, 7).dims(GridDims::new(32, 16)).build().unwrap();
        for (_, a) in store.iter() {
            assert!((0.0..32.0).contains(&a.position.x));
            assert!((0.0..16.0).contains(&a.position.y));
            assert!((0.0..TAU).contains(&a.heading));
            for c in [a.color.r, a.color.g, a.color.b] {
                assert!((0.0..=1.0).contains(&c));
            }
            assert_eq!(a.color.a, 1.0);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let cfg = SimulationConfig::default();
        let a = AgentStore::initialize(&cfg, 99).unwrap();
        let b = AgentStore::initialize(&cfg, 99).unwrap();
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.headings(), b.headings());
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn different_seed_different_population() {
        let cfg = SimulationConfig::default();
        let a = AgentStore::initialize(&cfg, 1).unwrap();
        let b = AgentStore::initialize(&cfg, 2).unwrap();
        assert_ne!(a.positions(), b.positions());
    }

    #[test]
    fn growing_population_keeps_existing_agents() {
        let dims = GridDims::new(64, 64);
        let small = AgentStoreBuilder::new(10, 5).dims(dims).build().unwrap();
        let large = AgentStoreBuilder::new(20, 5).dims(dims).build().unwrap();
        assert_eq!(small.positions(), &large.positions()[..10]);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn count_beyond_id_range_rejected() {
        let result = AgentStoreBuilder::new(u32::MAX as usize + 1, 0).build();
        assert!(matches!(result, Err(ResourceError::TooManyAgents { .. })));
    }
}

#[cfg(test)]
mod store {
    use sm_core::{AgentId, Rgba, Vec2};

    use crate::{Agent, AgentStore};

    fn two_agents() -> AgentStore {
        AgentStore::from_agents(&[
            Agent::new(Vec2::new(1.0, 2.0), 0.5, Rgba::opaque(1.0, 0.0, 0.0)),
            Agent::new(Vec2::new(3.0, 4.0), 1.5, Rgba::opaque(0.0, 1.0, 0.0)),
        ])
        .unwrap()
    }

    #[test]
    fn from_agents_preserves_order() {
        let store = two_agents();
        assert_eq!(store.count, 2);
        assert_eq!(store.get(AgentId(1)).position, Vec2::new(3.0, 4.0));
        assert_eq!(store.agent_ids().collect::<Vec<_>>(), vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn empty_store() {
        let store = AgentStore::from_agents(&[]).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn for_each_writes_motion_back() {
        let mut store = two_agents();
        store.for_each(|id, mut a| {
            a.position.x += 10.0;
            a.heading = id.0 as f32;
            a
        });
        assert_eq!(store.positions()[0], Vec2::new(11.0, 2.0));
        assert_eq!(store.headings(), &[0.0, 1.0]);
    }

    #[test]
    fn color_is_never_mutated() {
        let mut store = two_agents();
        store.for_each(|_, mut a| {
            a.color = Rgba::WHITE;
            a
        });
        assert_eq!(store.colors()[0], Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(store.colors()[1], Rgba::opaque(0.0, 1.0, 0.0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let step = |id: AgentId, mut a: Agent| {
            a.position.y += a.heading * 2.0;
            a.heading += id.0 as f32 * 0.25;
            a
        };
        let mut seq = two_agents();
        let mut par = two_agents();
        seq.for_each(step);
        par.for_each_parallel(step);
        assert_eq!(seq.positions(), par.positions());
        assert_eq!(seq.headings(), par.headings());
    }

    #[test]
    fn closure_sees_only_its_own_agent() {
        let mut store = two_agents();
        store.for_each_parallel(|id, a| {
            let expected_x = if id.0 == 0 { 1.0 } else { 3.0 };
            assert_eq!(a.position.x, expected_x);
            a
        });
    }
}
