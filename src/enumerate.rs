//! The enumeration core: an iterative work queue over lookup queries with a
//! visited-set guard, feeding a monotonically growing result set.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::config::EnumConfig;
use crate::discover::SubdomainSource;
use crate::error::SubhunterError;
use crate::normalize::{matches_extension, normalize_record};

/// Outcome of a run. `subdomains` is sorted by construction, which keeps
/// console listings and serialized output deterministic.
#[derive(Debug, Default)]
pub struct Enumeration {
    pub subdomains: BTreeSet<String>,
    pub queries_issued: usize,
    pub failed_branches: usize,
    /// True when `max_queries` stopped the run before the queue drained.
    pub capped: bool,
}

/// Drive the fetch/normalize cycle until the work queue drains.
///
/// Recursion into wildcards is iterative: each wildcard hit enqueues one
/// follow-up wildcard query, and the visited set guarantees every distinct
/// query is issued at most once, so cyclic responses terminate.
///
/// A transport failure on the root query is fatal. On a recursive branch it
/// is recorded and skipped. A parse failure on any query counts as an empty
/// response.
pub async fn enumerate(
    source: &dyn SubdomainSource,
    cfg: &EnumConfig,
) -> Result<Enumeration, SubhunterError> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    let mut out = Enumeration::default();

    queue.push_back(cfg.domain.clone());
    let mut is_root = true;

    while let Some(query) = queue.pop_front() {
        if !visited.insert(query.clone()) {
            continue;
        }
        if cfg.max_queries > 0 && out.queries_issued >= cfg.max_queries {
            tracing::warn!(
                max_queries = cfg.max_queries,
                pending = queue.len() + 1,
                "query cap reached, abandoning remaining branches"
            );
            out.capped = true;
            break;
        }

        out.queries_issued += 1;
        let records = match source.fetch(&query).await {
            Ok(records) => records,
            Err(err @ SubhunterError::Transport { .. }) if is_root => return Err(err),
            Err(SubhunterError::Transport { query, reason }) => {
                tracing::warn!(%query, %reason, "branch query failed, skipping");
                out.failed_branches += 1;
                is_root = false;
                continue;
            }
            Err(SubhunterError::Parse { query, reason }) => {
                tracing::warn!(%query, %reason, "unparseable payload, treating as empty");
                is_root = false;
                continue;
            }
            Err(other) => return Err(other),
        };
        is_root = false;

        for record in &records {
            for cand in normalize_record(record, &cfg.domain) {
                if cand.is_wildcard {
                    if cfg.exclude_wildcards {
                        continue;
                    }
                    let literal = format!("*.{}", cand.name);
                    if cfg.include_wildcards && matches_extension(&cand.name, &cfg.extensions) {
                        out.subdomains.insert(literal.clone());
                    }
                    if cfg.recursive && !visited.contains(&literal) {
                        queue.push_back(literal);
                    }
                } else if matches_extension(&cand.name, &cfg.extensions) {
                    out.subdomains.insert(cand.name);
                }
            }
        }
    }

    tracing::info!(
        source = source.name(),
        found = out.subdomains.len(),
        queries = out.queries_issued,
        failed_branches = out.failed_branches,
        "enumeration finished"
    );
    Ok(out)
}
