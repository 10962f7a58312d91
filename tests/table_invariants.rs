use portfolio_dp::{table::DpTable, Project, TabulationSolver};
use proptest::prelude::*;

fn arb_instance() -> impl Strategy<Value = (usize, Vec<Project>)> {
    (
        0usize..30,
        proptest::collection::vec((0u64..40, 0usize..12), 0..8),
    )
        .prop_map(|(capacity, raw)| {
            let projects = raw
                .into_iter()
                .enumerate()
                .map(|(k, (v, h))| Project::new(format!("p{k}"), v, h))
                .collect();
            (capacity, projects)
        })
}

proptest! {
    #[test]
    fn table_shape_and_monotonicity((capacity, projects) in arb_instance()) {
        let t = TabulationSolver::build_table(capacity, &projects);
        prop_assert_eq!(t.rows(), projects.len() + 1);
        prop_assert_eq!(t.cols(), capacity + 1);
        prop_assert!(t.row(0).iter().all(|&v| v == 0));
        prop_assert!(t.is_monotone());
    }

    #[test]
    fn column_zero_only_counts_free_projects((capacity, projects) in arb_instance()) {
        let t = TabulationSolver::build_table(capacity, &projects);
        let free: u64 = projects.iter().filter(|p| p.hours == 0).map(|p| p.value).sum();
        prop_assert_eq!(t.get(projects.len(), 0), free);
    }

    #[test]
    fn reconstruction_reaches_table_optimum((capacity, projects) in arb_instance()) {
        let t = TabulationSolver::build_table(capacity, &projects);
        let chosen = TabulationSolver::reconstruct(&t, &projects);
        let value: u64 = chosen.iter().map(|&k| projects[k].value).sum();
        let hours: usize = chosen.iter().map(|&k| projects[k].hours).sum();
        prop_assert_eq!(value, t.optimal());
        prop_assert!(hours <= capacity);
    }
}

#[test]
fn empty_portfolio_table_is_single_zero_row() {
    let t = TabulationSolver::build_table(4, &[]);
    assert_eq!(t, DpTable::new(0, 4));
    assert!(TabulationSolver::reconstruct(&t, &[]).is_empty());
}
