use rand::Rng;
use rand::SeedableRng;
use tsutil::prelude::*;

#[derive(Copy, Clone, Debug)]
pub struct TableParams {
    pub num_sites: usize,
    pub num_mutations: usize,
    pub max_payload_len: usize,
    pub allow_forward_parents: bool,
    pub seed: u64,
}

fn random_payload(rng: &mut rand::rngs::StdRng, max_len: usize) -> Option<Vec<u8>> {
    let len = rng.gen_range(0..=max_len);
    if len == 0 && rng.gen_bool(0.5) {
        None
    } else {
        Some((0..len).map(|_| rng.gen::<u8>()).collect())
    }
}

/// A random, valid collection.  Parents are earlier
/// rows unless `allow_forward_parents` is set.
pub fn random_tables(params: TableParams) -> TableCollection {
    let mut rng = rand::rngs::StdRng::seed_from_u64(params.seed);
    let mut tables = TableCollection::new();
    for i in 0..params.num_sites {
        let astate = random_payload(&mut rng, params.max_payload_len);
        tables
            .add_site(i as f64, astate.as_deref(), None)
            .unwrap();
    }
    if params.num_sites == 0 {
        return tables;
    }
    for i in 0..params.num_mutations {
        let site = rng.gen_range(0..params.num_sites) as i32;
        let parent_bound = if params.allow_forward_parents {
            params.num_mutations
        } else {
            i
        };
        let parent = if parent_bound > 0 && rng.gen_bool(0.5) {
            Some(MutationId::from(rng.gen_range(0..parent_bound) as i32))
        } else {
            None
        };
        let derived_state = random_payload(&mut rng, params.max_payload_len);
        let metadata = random_payload(&mut rng, params.max_payload_len);
        tables
            .add_mutation(
                site,
                rng.gen_range(0..100_i32),
                rng.gen_range(0.0..10.0_f64),
                derived_state.as_deref(),
                metadata.as_deref(),
                parent,
            )
            .unwrap();
    }
    tables
}

pub fn random_site_ids(num_sites: usize, seed: u64) -> Vec<SiteId> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    if num_sites == 0 {
        return vec![];
    }
    let n = rng.gen_range(0..=num_sites);
    (0..n)
        .map(|_| SiteId::from(rng.gen_range(0..num_sites) as i32))
        .collect()
}

/// Row-by-row rebuild of the mutation table, used to
/// check the column-wise implementation.
pub fn naive_delete_sites(
    tables: &TableCollection,
    site_ids: &[SiteId],
    keep_sites: bool,
) -> TableCollection {
    let removed = |s: SiteId| site_ids.contains(&s);
    let mut rv = TableCollection::new();
    let mut new_site_id = vec![SiteId::NULL; tables.num_sites()];
    for (i, site) in tables.sites().iter().enumerate() {
        if keep_sites || !removed(site.id) {
            new_site_id[i] = rv
                .add_site(
                    site.position.raw(),
                    Some(site.ancestral_state),
                    Some(site.metadata),
                )
                .unwrap();
        }
    }
    let mut new_mutation_id = vec![MutationId::NULL; tables.num_mutations()];
    let mut next = 0;
    for (i, m) in tables.mutations().iter().enumerate() {
        if !removed(m.site) {
            new_mutation_id[i] = MutationId::from(next);
            next += 1;
        }
    }
    let mut mutations = MutationTable::new();
    for (i, m) in tables.mutations().iter().enumerate() {
        if new_mutation_id[i].is_null() {
            continue;
        }
        let site = if keep_sites {
            m.site
        } else {
            new_site_id[m.site.to_index().unwrap()]
        };
        let parent = m
            .parent
            .and_then(|p| new_mutation_id[p.to_index().unwrap()].to_option());
        mutations
            .add_row(
                site,
                m.node,
                m.time,
                Some(m.derived_state),
                Some(m.metadata),
                parent,
            )
            .unwrap();
    }
    let (sites, _, _) = rv.into_tables();
    TableCollection::from_tables(sites, mutations, ProvenanceTable::new()).unwrap()
}
