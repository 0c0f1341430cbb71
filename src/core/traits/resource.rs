use crate::core::cloud::CloudProvider;
use crate::CloudcheckResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Resource trait
///
/// Common lifecycle for the service resources the checks run against: a
/// DynamoDB table, a Kinesis stream, an S3 bucket. `setup` creates the
/// resource when it does not exist yet, the polling helpers wait for it to
/// become usable (or to disappear after `teardown`). Implementations live in
/// the `setup` module, one per provider.
#[async_trait]
pub trait Resource: Send + Sync {
    type SetupArgs: Send + Sync;

    /// Build a client bound to the provider config and the resource named in `args`.
    async fn create_setup(provider: Arc<CloudProvider>, args: &Self::SetupArgs) -> CloudcheckResult<Self>
    where
        Self: Sized;

    /// Create the resource when missing. Must be safe to call on an existing resource.
    async fn setup(&self) -> CloudcheckResult<()>;

    /// Check if the resource exists at all, regardless of its state.
    async fn check_if_exists(&self) -> CloudcheckResult<bool>;

    /// Check if the resource is created and ready to serve requests.
    async fn is_ready_to_use(&self) -> CloudcheckResult<bool>;

    /// Delete the resource.
    async fn teardown(&self) -> CloudcheckResult<()>;

    /// Poll `is_ready_to_use` until it reports true or the timeout elapses.
    /// Returns false on timeout or on the first probe error.
    async fn poll_ready(&self, poll_interval_secs: u64, timeout_secs: u64) -> bool {
        let start = std::time::Instant::now();
        let timeout = Duration::from_secs(timeout_secs);
        let interval = Duration::from_secs(poll_interval_secs);

        while start.elapsed() < timeout {
            match self.is_ready_to_use().await {
                Ok(true) => return true,
                Ok(false) => tokio::time::sleep(interval).await,
                Err(_) => return false,
            }
        }
        false
    }

    /// Poll `check_if_exists` until the resource is gone or the timeout elapses.
    /// Returns false on timeout or on the first probe error.
    async fn poll_absent(&self, poll_interval_secs: u64, timeout_secs: u64) -> bool {
        let start = std::time::Instant::now();
        let timeout = Duration::from_secs(timeout_secs);
        let interval = Duration::from_secs(poll_interval_secs);

        while start.elapsed() < timeout {
            match self.check_if_exists().await {
                Ok(false) => return true,
                Ok(true) => tokio::time::sleep(interval).await,
                Err(_) => return false,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyResource {
        probes_until_ready: usize,
        probes: AtomicUsize,
        fail: bool,
    }

    impl FlakyResource {
        fn ready_after(probes: usize) -> Self {
            Self { probes_until_ready: probes, probes: AtomicUsize::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { probes_until_ready: 0, probes: AtomicUsize::new(0), fail: true }
        }
    }

    #[async_trait]
    impl Resource for FlakyResource {
        type SetupArgs = ();

        async fn create_setup(_provider: Arc<CloudProvider>, _args: &()) -> CloudcheckResult<Self> {
            Ok(Self::ready_after(0))
        }

        async fn setup(&self) -> CloudcheckResult<()> {
            Ok(())
        }

        async fn check_if_exists(&self) -> CloudcheckResult<bool> {
            let seen = self.probes.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(seen < self.probes_until_ready)
        }

        async fn is_ready_to_use(&self) -> CloudcheckResult<bool> {
            if self.fail {
                return Err(crate::CloudcheckError::ResourceSetupError("probe failed".to_string()));
            }
            let seen = self.probes.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(seen >= self.probes_until_ready)
        }

        async fn teardown(&self) -> CloudcheckResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn poll_ready_returns_true_once_resource_reports_ready() {
        let resource = FlakyResource::ready_after(3);
        assert!(resource.poll_ready(0, 5).await);
        assert_eq!(resource.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn poll_ready_gives_up_on_probe_error() {
        let resource = FlakyResource::failing();
        assert!(!resource.poll_ready(0, 5).await);
    }

    #[tokio::test]
    async fn poll_ready_returns_false_when_timeout_already_elapsed() {
        let resource = FlakyResource::ready_after(1);
        assert!(!resource.poll_ready(0, 0).await);
        assert_eq!(resource.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn poll_absent_returns_true_once_resource_is_gone() {
        let resource = FlakyResource::ready_after(3);
        assert!(resource.poll_absent(0, 5).await);
    }
}
