use chrono::{DateTime, Utc};

use crate::catalog::DocumentRecord;
use crate::delivery::{
    observe::{DeliveryEvent, DeliveryLog},
    probe::Prober,
    resolver::{absolute_url, candidate_paths, resolve},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
    Unknown,
}

/// Where a document is expected to be served. Recomputed per view attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// Path relative to the host, e.g. `/PPVE/ENEDIS.pdf`.
    pub url: String,
    pub reachable: Reachability,
    pub probed_at: Option<DateTime<Utc>>,
    /// Status of the last probe, when one was made and got a response.
    pub status: Option<u16>,
}

impl ResolvedLocation {
    pub fn unprobed(url: String) -> Self {
        Self {
            url,
            reachable: Reachability::Unknown,
            probed_at: None,
            status: None,
        }
    }

    pub fn for_record(record: &DocumentRecord) -> Self {
        Self::unprobed(resolve(&record.filename, record.category))
    }

    pub fn is_unreachable(&self) -> bool {
        self.reachable == Reachability::Unreachable
    }
}

/// Probe the candidate paths of a document in order and keep the first
/// reachable one. When nothing answers, the canonical path is returned as
/// unreachable.
pub async fn locate<P: Prober>(
    prober: &P,
    host: &str,
    record: &DocumentRecord,
    log: &dyn DeliveryLog,
) -> ResolvedLocation {
    let candidates = candidate_paths(&record.filename, record.category);
    let mut canonical: Option<ResolvedLocation> = None;

    for path in candidates {
        let outcome = prober.probe(&absolute_url(host, &path)).await;
        log.record(DeliveryEvent::Probed {
            url: path.clone(),
            reachable: outcome.reachable,
            status: outcome.status_code,
        });

        let location = ResolvedLocation {
            url: path,
            reachable: if outcome.reachable {
                Reachability::Reachable
            } else {
                Reachability::Unreachable
            },
            probed_at: Some(outcome.probed_at),
            status: outcome.status_code,
        };

        if outcome.reachable {
            log.record(DeliveryEvent::Resolved {
                filename: record.filename.clone(),
                url: location.url.clone(),
            });
            return location;
        }

        if canonical.is_none() {
            canonical = Some(location);
        }
    }

    canonical.unwrap_or_else(|| ResolvedLocation::for_record(record))
}
