#[path = "./stochastic_testing_tools.rs"]
mod stochastic_testing_tools;

use proptest::prelude::*;
use stochastic_testing_tools::*;
use tsutil::prelude::*;

fn check_offsets(column: &OffsetColumn, num_rows: usize) {
    let offsets = column.offsets();
    assert_eq!(offsets.len(), num_rows + 1);
    assert_eq!(offsets[0], 0);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*offsets.last().unwrap() as usize, column.data().len());
}

fn check_output(input: &TableCollection, site_ids: &[SiteId], output: &TableCollection) {
    let n = output.num_mutations();
    for p in output.mutations().parent_column() {
        assert!(p.is_null() || p.to_index().unwrap() < n);
    }
    check_offsets(output.mutations().derived_state_column(), n);
    check_offsets(output.mutations().metadata_column(), n);
    check_offsets(output.sites().ancestral_state_column(), output.num_sites());
    check_offsets(output.sites().metadata_column(), output.num_sites());
    check_offsets(output.provenances().timestamp_column(), output.num_provenances());
    check_offsets(output.provenances().record_column(), output.num_provenances());

    let expected = input
        .mutations()
        .site_column()
        .iter()
        .filter(|s| !site_ids.contains(*s))
        .count();
    assert_eq!(n, expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn test_delete_sites_vs_naive(num_sites in 0..20_usize,
                                  num_mutations in 0..100_usize,
                                  seed in 0..u64::MAX,
                                  delete_seed in 0..u64::MAX) {
        let params = TableParams {
            num_sites,
            num_mutations,
            max_payload_len: 5,
            allow_forward_parents: false,
            seed,
        };
        let tables = random_tables(params);
        let site_ids = random_site_ids(num_sites, delete_seed);
        let rv = tables.delete_sites(&site_ids, DeleteSitesFlags::default()).unwrap();
        check_output(&tables, &site_ids, &rv);
        prop_assert_eq!(rv.num_sites(), num_sites - {
            let mut u = site_ids.clone();
            u.sort();
            u.dedup();
            u.len()
        });
        let naive = naive_delete_sites(&tables, &site_ids, false);
        prop_assert_eq!(rv.sites(), naive.sites());
        prop_assert_eq!(rv.mutations(), naive.mutations());
        prop_assert!(rv.validate(TableValidationFlags::VALIDATE_ALL |
                                 TableValidationFlags::VALIDATE_MUTATION_PARENT_ORDER).is_ok());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn test_delete_site_mutations_vs_naive(num_sites in 1..20_usize,
                                           num_mutations in 0..100_usize,
                                           seed in 0..u64::MAX,
                                           delete_seed in 0..u64::MAX) {
        let params = TableParams {
            num_sites,
            num_mutations,
            max_payload_len: 3,
            allow_forward_parents: true,
            seed,
        };
        let tables = random_tables(params);
        let site_ids = random_site_ids(num_sites, delete_seed);
        let rv = tables.delete_site_mutations(&site_ids).unwrap();
        check_output(&tables, &site_ids, &rv);
        prop_assert_eq!(rv.sites(), tables.sites());
        let naive = naive_delete_sites(&tables, &site_ids, true);
        prop_assert_eq!(rv.mutations(), naive.mutations());
    }
}

proptest! {
    #[test]
    fn test_out_of_bounds_is_an_error(num_sites in 0..20_usize, extra in 0..10_i32, seed in 0..u64::MAX) {
        let params = TableParams {
            num_sites,
            num_mutations: 10,
            max_payload_len: 2,
            allow_forward_parents: false,
            seed,
        };
        let tables = random_tables(params);
        let copy = tables.clone();
        let bad = SiteId::from(num_sites as i32 + extra);
        let rv = tables.delete_sites(&[bad], DeleteSitesFlags::default());
        prop_assert_eq!(rv, Err(TablesError::SiteIdOutOfBounds { found: bad, num_sites }));
        prop_assert_eq!(tables, copy);
    }
}

proptest! {
    #[test]
    fn test_row_map_compaction(keep in proptest::collection::vec(any::<bool>(), 0..200)) {
        let map = RowMap::<MutationId>::from_keep_mask(&keep).unwrap();
        prop_assert_eq!(map.num_kept(), keep.iter().filter(|k| **k).count());
        let kept = map.as_slice().iter().filter(|m| !m.is_null()).map(|m| m.raw()).collect::<Vec<_>>();
        prop_assert_eq!(kept, (0..map.num_kept() as i32).collect::<Vec<_>>());
        prop_assert_eq!(map.apply(&[MutationId::NULL]).unwrap(), vec![MutationId::NULL]);
    }
}

proptest! {
    #[test]
    fn test_offset_column_filter(rows in proptest::collection::vec(
                                     proptest::collection::vec(any::<u8>(), 0..8), 0..50),
                                 seed in any::<u64>()) {
        use rand::{Rng, SeedableRng};
        let mut column = OffsetColumn::new();
        for r in &rows {
            column.push(Some(r.as_slice()));
        }
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let keep = (0..rows.len()).map(|_| rng.gen_bool(0.5)).collect::<Vec<_>>();
        let filtered = column.filter_rows(&keep).unwrap();
        let expected = rows
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(r, _)| r.as_slice())
            .collect::<Vec<_>>();
        prop_assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
        check_offsets(&filtered, filtered.num_rows());
    }
}
