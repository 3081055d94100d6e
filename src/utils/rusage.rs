//! Process resource usage, queried once at shutdown

use crate::error::CountError;
use std::time::Duration;

/// CPU time and peak memory of a process (or of its reaped children)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceUsage {
    pub user_cpu: Duration,
    pub system_cpu: Duration,
    /// Peak resident set size in kilobytes
    pub max_rss_kb: u64,
}

impl ResourceUsage {
    /// Usage of the calling process
    pub fn for_self() -> Result<Self, CountError> {
        query(Who::SelfProcess)
    }

    /// Usage of all terminated and waited-for child processes
    pub fn for_children() -> Result<Self, CountError> {
        query(Who::Children)
    }
}

#[derive(Debug, Clone, Copy)]
enum Who {
    SelfProcess,
    Children,
}

#[cfg(unix)]
fn query(who: Who) -> Result<ResourceUsage, CountError> {
    let who = match who {
        Who::SelfProcess => libc::RUSAGE_SELF,
        Who::Children => libc::RUSAGE_CHILDREN,
    };

    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage only writes into the provided struct
    let rc = unsafe { libc::getrusage(who, usage.as_mut_ptr()) };
    if rc != 0 {
        return Err(CountError::ResourceQuery(std::io::Error::last_os_error()));
    }
    // SAFETY: zero-initialised and filled by a successful getrusage
    let usage = unsafe { usage.assume_init() };

    Ok(ResourceUsage {
        user_cpu: timeval_to_duration(usage.ru_utime),
        system_cpu: timeval_to_duration(usage.ru_stime),
        max_rss_kb: max_rss_kb(usage.ru_maxrss as u64),
    })
}

#[cfg(not(unix))]
fn query(_who: Who) -> Result<ResourceUsage, CountError> {
    Err(CountError::ResourceQuery(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "getrusage is not available on this platform",
    )))
}

#[cfg(unix)]
fn timeval_to_duration(tv: libc::timeval) -> Duration {
    Duration::from_secs(tv.tv_sec.max(0) as u64) + Duration::from_micros(tv.tv_usec.max(0) as u64)
}

// macOS reports ru_maxrss in bytes, Linux and the BSDs in kilobytes
#[cfg(target_os = "macos")]
fn max_rss_kb(raw: u64) -> u64 {
    raw / 1024
}

#[cfg(not(target_os = "macos"))]
fn max_rss_kb(raw: u64) -> u64 {
    raw
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_self_usage() {
        // burn a little CPU so user time is measurable on coarse clocks
        let sum: u64 = (0..2_000_000u64).map(|x| x % 7).sum();
        assert!(sum > 0);

        let usage = ResourceUsage::for_self().unwrap();
        assert!(usage.max_rss_kb > 0);
    }

    #[test]
    fn test_children_usage_query_succeeds() {
        assert!(ResourceUsage::for_children().is_ok());
    }

    #[test]
    fn test_timeval_conversion() {
        let tv = libc::timeval {
            tv_sec: 2,
            tv_usec: 500_000,
        };
        assert_eq!(timeval_to_duration(tv), Duration::from_millis(2_500));
    }
}
