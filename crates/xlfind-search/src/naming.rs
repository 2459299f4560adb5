use std::collections::HashSet;

use crate::item::MatchedItem;

/// Make every arc name unique, ignoring case.
///
/// The first item carrying a name keeps it, as does every item whose name
/// was unique to begin with. Later duplicates become `stem-2.ext`,
/// `stem-3.ext`, ... taking the lowest suffix not already claimed.
pub fn resolve_collisions(items: &mut [MatchedItem]) {
    let reserved: HashSet<String> = items.iter().map(|item| item.arc_name.to_lowercase()).collect();
    let mut assigned: HashSet<String> = HashSet::with_capacity(items.len());

    for item in items.iter_mut() {
        if assigned.insert(item.arc_name.to_lowercase()) {
            continue;
        }

        let mut n = 2usize;
        let renamed = loop {
            let candidate = with_suffix(&item.arc_name, n);
            let key = candidate.to_lowercase();
            if !reserved.contains(&key) && assigned.insert(key) {
                break candidate;
            }
            n += 1;
        };
        tracing::debug!(from = %item.arc_name, to = %renamed, "renamed colliding entry");
        item.arc_name = renamed;
    }
}

fn with_suffix(name: &str, n: usize) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}-{}{}", &name[..dot], n, &name[dot..]),
        _ => format!("{name}-{n}"),
    }
}
