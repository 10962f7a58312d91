use portfolio_dp::{
    GreedySolver, MemoizedSolver, PortfolioSolver, Project, RecursiveSolver, TabulationSolver,
};
use proptest::prelude::*;

/// Best value over every subset, by bitmask enumeration.
fn brute_force(capacity: usize, projects: &[Project]) -> u64 {
    let n = projects.len();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let (mut hours, mut value) = (0usize, 0u64);
        for (k, p) in projects.iter().enumerate() {
            if mask & (1 << k) != 0 {
                hours += p.hours;
                value += p.value;
            }
        }
        if hours <= capacity {
            best = best.max(value);
        }
    }
    best
}

fn arb_projects(max_len: usize) -> impl Strategy<Value = Vec<Project>> {
    arb_projects_with_hours(max_len, 1)
}

/// Also yields zero-hours projects, on which the exact solvers may differ.
fn arb_projects_with_free(max_len: usize) -> impl Strategy<Value = Vec<Project>> {
    arb_projects_with_hours(max_len, 0)
}

fn arb_projects_with_hours(max_len: usize, min_hours: usize) -> impl Strategy<Value = Vec<Project>> {
    proptest::collection::vec((0u64..60, min_hours..15), 0..=max_len).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(k, (value, hours))| Project::new(format!("p{k}"), value, hours))
            .collect()
    })
}

proptest! {
    #[test]
    fn exact_solvers_agree_with_brute_force(
        capacity in 0usize..40,
        projects in arb_projects(10),
    ) {
        let expected = brute_force(capacity, &projects);
        prop_assert_eq!(RecursiveSolver.solve(capacity, &projects), expected);
        prop_assert_eq!(MemoizedSolver.solve(capacity, &projects), expected);
        prop_assert_eq!(TabulationSolver.solve(capacity, &projects).value, expected);
    }

    #[test]
    fn greedy_never_beats_the_optimum(
        capacity in 0usize..60,
        projects in arb_projects_with_free(12),
    ) {
        let optimal = TabulationSolver.solve(capacity, &projects).value;
        prop_assert!(GreedySolver.solve(capacity, &projects) <= optimal);
    }

    #[test]
    fn selection_is_feasible_and_consistent(
        capacity in 0usize..60,
        projects in arb_projects_with_free(12),
    ) {
        let sel = TabulationSolver.solve(capacity, &projects);
        prop_assert!(sel.total_hours() <= capacity);
        prop_assert_eq!(sel.total_value(), sel.value);
        prop_assert!(sel.indices.windows(2).all(|w| w[0] < w[1]));
        for (&k, p) in sel.indices.iter().zip(&sel.projects) {
            prop_assert_eq!(&projects[k], p);
        }
    }

    #[test]
    fn solving_twice_gives_identical_output(
        capacity in 0usize..40,
        projects in arb_projects(10),
    ) {
        prop_assert_eq!(
            GreedySolver.solve(capacity, &projects),
            GreedySolver.solve(capacity, &projects)
        );
        prop_assert_eq!(
            RecursiveSolver.solve(capacity, &projects),
            RecursiveSolver.solve(capacity, &projects)
        );
        prop_assert_eq!(
            MemoizedSolver.solve_with_stats(capacity, &projects),
            MemoizedSolver.solve_with_stats(capacity, &projects)
        );
        prop_assert_eq!(
            TabulationSolver.solve(capacity, &projects),
            TabulationSolver.solve(capacity, &projects)
        );
    }

    #[test]
    fn more_capacity_never_hurts(
        capacity in 0usize..40,
        extra in 0usize..10,
        projects in arb_projects(9),
    ) {
        let (lo, hi) = (capacity, capacity + extra);
        prop_assert!(RecursiveSolver.solve(lo, &projects) <= RecursiveSolver.solve(hi, &projects));
        prop_assert!(MemoizedSolver.solve(lo, &projects) <= MemoizedSolver.solve(hi, &projects));
        prop_assert!(
            TabulationSolver.solve(lo, &projects).value
                <= TabulationSolver.solve(hi, &projects).value
        );
    }
}
