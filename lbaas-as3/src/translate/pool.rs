use as3_declaration::{AppObject, LoadBalancingMode, MonitorRef, Pool};
use tracing::debug;

use crate::bundle::{Bundle, LbAlgorithm};
use crate::error::TranslateError;
use crate::sanitize::{monitor_name, pool_name};
use crate::translate::member::build_member;
use crate::translate::monitor::build_monitor;

/// Build pool `id` together with its health monitor.
///
/// Returns the named application entries: the pool first, then its monitor.
pub fn build_pool(bundle: &Bundle, id: &str) -> Result<Vec<(String, AppObject)>, TranslateError> {
    let found = bundle.pool(id)?;
    let hm_name = monitor_name(&found.healthmonitor_id);

    let monitor = build_monitor(bundle, &found.healthmonitor_id)?;

    let members = found
        .members
        .iter()
        .map(|member| build_member(bundle, &member.id))
        .collect::<Result<Vec<_>, _>>()?;

    let pool = Pool {
        load_balancing_mode: load_balancing_mode(&found.lb_algorithm),
        monitors: vec![MonitorRef::new(hm_name.clone())],
        members,
    };
    debug!(
        pool = %found.id,
        members = pool.members.len(),
        mode = ?pool.load_balancing_mode,
        "built pool"
    );

    Ok(vec![
        (pool_name(&found.id), pool.into()),
        (hm_name, monitor.into()),
    ])
}

/// Map a pool algorithm onto the declaration vocabulary.
///
/// Unrecognized algorithms fall back to round-robin.
pub fn load_balancing_mode(algorithm: &LbAlgorithm) -> LoadBalancingMode {
    match algorithm {
        LbAlgorithm::RoundRobin => LoadBalancingMode::RoundRobin,
        LbAlgorithm::LeastConnections => LoadBalancingMode::LeastConnectionsMember,
        LbAlgorithm::Other(_) => LoadBalancingMode::RoundRobin,
    }
}
