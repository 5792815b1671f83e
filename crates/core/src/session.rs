//! Short-lived cache of the signed-in user's profile
//!
//! Pages, guards and the header all ask for the profile while a route renders. The
//! cache answers from memory for a short window and folds concurrent misses into a
//! single request: every caller that arrives while a fetch is outstanding awaits the
//! same shared future and receives the same result, success or error.
//!
//! All state is single-threaded (`Rc`/`RefCell`); the browser event loop is the only
//! executor, and tests run on a current-thread runtime.

use crate::error::FetchError;
use crate::time::{Clock, SystemClock};
use crate::types::UserProfile;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// How long a fetched profile is served from memory
pub const DEFAULT_PROFILE_TTL_MS: i64 = 10_000;

/// Something that can load the current user's profile, normally the REST client
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ProfileSource {
    async fn fetch_profile(&self) -> Result<UserProfile, FetchError>;
}

type PendingProfile = Shared<LocalBoxFuture<'static, Result<UserProfile, FetchError>>>;

#[derive(Default)]
struct CacheSlot {
    profile: Option<UserProfile>,
    fetched_at: Option<DateTime<Utc>>,
    in_flight: Option<PendingProfile>,
    /// Bumped by `clear`; fetches started under an older generation must not write back
    generation: u64,
}

/// Profile cache with in-flight request deduplication
pub struct SessionCache {
    source: Rc<dyn ProfileSource>,
    clock: Rc<dyn Clock>,
    ttl: Duration,
    slot: Rc<RefCell<CacheSlot>>,
}

impl SessionCache {
    /// Create a cache over `source` using the wall clock and the default TTL
    pub fn new(source: Rc<dyn ProfileSource>) -> Self {
        Self::with_clock(
            source,
            Rc::new(SystemClock),
            Duration::milliseconds(DEFAULT_PROFILE_TTL_MS),
        )
    }

    pub fn with_clock(source: Rc<dyn ProfileSource>, clock: Rc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            slot: Rc::new(RefCell::new(CacheSlot::default())),
        }
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the profile, from memory when fresh, otherwise from the source.
    ///
    /// A failed fetch is reported to every waiter and leaves the cache as it was,
    /// so the next call tries again.
    pub async fn get_profile(&self) -> Result<UserProfile, FetchError> {
        let pending = {
            let mut slot = self.slot.borrow_mut();

            if let Some(profile) = self.fresh_profile(&slot) {
                debug!("Returning cached profile");
                return Ok(profile);
            }

            if let Some(pending) = &slot.in_flight {
                debug!("Joining in-flight profile request");
                pending.clone()
            } else {
                debug!("Starting profile request");
                let pending = self.start_fetch(slot.generation);
                slot.in_flight = Some(pending.clone());
                pending
            }
        };

        pending.await
    }

    /// Cached profile regardless of age, without touching the network
    pub fn cached(&self) -> Option<UserProfile> {
        self.slot.borrow().profile.clone()
    }

    /// Whether a fetch is currently outstanding
    pub fn is_fetching(&self) -> bool {
        self.slot.borrow().in_flight.is_some()
    }

    /// Drop the cached profile, its timestamp and any in-flight marker.
    ///
    /// Callers already awaiting an in-flight request still receive its result, but the
    /// result is not stored.
    pub fn clear(&self) {
        let mut slot = self.slot.borrow_mut();
        slot.profile = None;
        slot.fetched_at = None;
        slot.in_flight = None;
        slot.generation = slot.generation.wrapping_add(1);
        debug!("Profile cache cleared");
    }

    fn fresh_profile(&self, slot: &CacheSlot) -> Option<UserProfile> {
        let fetched_at = slot.fetched_at?;
        if self.clock.now() - fetched_at < self.ttl {
            slot.profile.clone()
        } else {
            None
        }
    }

    fn start_fetch(&self, generation: u64) -> PendingProfile {
        let source = Rc::clone(&self.source);
        let clock = Rc::clone(&self.clock);
        let slot = Rc::downgrade(&self.slot);

        async move {
            let result = source.fetch_profile().await;

            // The cache may have been dropped or cleared while the request was out
            if let Some(slot) = slot.upgrade() {
                let mut slot = slot.borrow_mut();
                if slot.generation == generation {
                    slot.in_flight = None;
                    match &result {
                        Ok(profile) => {
                            slot.profile = Some(profile.clone());
                            slot.fetched_at = Some(clock.now());
                        }
                        Err(err) => warn!("Profile request failed: {err}"),
                    }
                }
            }

            result
        }
        .boxed_local()
        .shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;
    use std::cell::Cell;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            id: format!("google#{name}"),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            picture_url: None,
            provider: "google".to_string(),
            provider_id: None,
            role: "USER".to_string(),
            last_login: None,
        }
    }

    /// Source that yields once before answering so concurrent callers overlap
    struct SlowSource {
        calls: Cell<usize>,
        fail_with: Option<FetchError>,
    }

    impl SlowSource {
        fn ok() -> Self {
            Self {
                calls: Cell::new(0),
                fail_with: None,
            }
        }

        fn failing(err: FetchError) -> Self {
            Self {
                calls: Cell::new(0),
                fail_with: Some(err),
            }
        }
    }

    #[async_trait(?Send)]
    impl ProfileSource for SlowSource {
        async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(profile("ada")),
            }
        }
    }

    fn cache_over(source: Rc<dyn ProfileSource>, clock: Rc<ManualClock>) -> SessionCache {
        SessionCache::with_clock(
            source,
            clock,
            Duration::milliseconds(DEFAULT_PROFILE_TTL_MS),
        )
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_fetch() {
        let source = Rc::new(SlowSource::ok());
        let cache = cache_over(source.clone(), Rc::new(ManualClock::default()));

        let (first, second) = futures::join!(cache.get_profile(), cache.get_profile());

        assert_eq!(first.unwrap(), profile("ada"));
        assert_eq!(second.unwrap(), profile("ada"));
        assert_eq!(source.calls.get(), 1);
        assert!(!cache.is_fetching());
    }

    #[tokio::test]
    async fn test_fresh_profile_served_from_memory() {
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .times(1)
            .returning(|| Ok(profile("ada")));
        let clock = Rc::new(ManualClock::default());
        let cache = cache_over(Rc::new(source), clock.clone());

        cache.get_profile().await.unwrap();
        clock.advance(Duration::milliseconds(9_999));
        assert_eq!(cache.get_profile().await.unwrap(), profile("ada"));
    }

    #[tokio::test]
    async fn test_expired_profile_is_refetched() {
        let mut source = MockProfileSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch_profile()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(profile("ada")));
        source
            .expect_fetch_profile()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(profile("grace")));
        let clock = Rc::new(ManualClock::default());
        let cache = cache_over(Rc::new(source), clock.clone());

        assert_eq!(cache.get_profile().await.unwrap().name, "ada");
        clock.advance(Duration::milliseconds(DEFAULT_PROFILE_TTL_MS));
        assert_eq!(cache.get_profile().await.unwrap().name, "grace");
    }

    #[tokio::test]
    async fn test_failure_reaches_every_waiter_and_does_not_poison() {
        let source = Rc::new(SlowSource::failing(FetchError::Failed(
            "connection reset".into(),
        )));
        let cache = cache_over(source.clone(), Rc::new(ManualClock::default()));

        let (first, second) = futures::join!(cache.get_profile(), cache.get_profile());
        assert_eq!(first, Err(FetchError::Failed("connection reset".into())));
        assert_eq!(second, Err(FetchError::Failed("connection reset".into())));
        assert_eq!(source.calls.get(), 1);

        assert!(cache.cached().is_none());
        assert!(!cache.is_fetching());

        // Next call goes back to the source
        let _ = cache.get_profile().await;
        assert_eq!(source.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_profile() {
        let mut source = MockProfileSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch_profile()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(profile("ada")));
        source
            .expect_fetch_profile()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(FetchError::Failed("503".into())));
        let clock = Rc::new(ManualClock::default());
        let cache = cache_over(Rc::new(source), clock.clone());

        cache.get_profile().await.unwrap();
        clock.advance(Duration::seconds(11));
        assert!(cache.get_profile().await.is_err());
        assert_eq!(cache.cached(), Some(profile("ada")));
    }

    #[tokio::test]
    async fn test_clear_forces_refetch() {
        let mut source = MockProfileSource::new();
        source
            .expect_fetch_profile()
            .times(2)
            .returning(|| Ok(profile("ada")));
        let cache = cache_over(Rc::new(source), Rc::new(ManualClock::default()));

        cache.get_profile().await.unwrap();
        cache.clear();
        assert!(cache.cached().is_none());
        cache.get_profile().await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_during_fetch_discards_late_result() {
        let source = Rc::new(SlowSource::ok());
        let cache = cache_over(source.clone(), Rc::new(ManualClock::default()));

        // join! polls in order: the fetch starts and parks, then the cache is cleared
        let pending = cache.get_profile();
        let clear_midway = async {
            cache.clear();
        };
        let (result, ()) = futures::join!(pending, clear_midway);

        // The waiter still gets its answer, but the cache stays empty
        assert!(result.is_ok());
        assert!(cache.cached().is_none());
        assert!(!cache.is_fetching());
    }
}
