mod client;
mod model;

pub use client::{IpApiClient, LocationLookup};
pub use model::{IpApiResponse, LocationError, format_location};

use crate::activity::{ActivityEvent, ActivityLog};

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// 查询位置，任何失败都降级为 "Unknown Location"，失败原因写入活动日志
pub async fn resolve_location(
    lookup: &dyn LocationLookup,
    activity: &ActivityLog,
    ip: &str,
) -> String {
    match lookup.lookup(ip).await {
        Ok(location) => location,
        Err(e) => {
            let reason = e.to_string();
            activity
                .record(ActivityEvent::LookupFailed {
                    ip,
                    reason: &reason,
                })
                .await;
            UNKNOWN_LOCATION.to_string()
        }
    }
}
