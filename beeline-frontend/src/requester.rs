use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use beeline_entities::address::AddressPair;

use crate::{DistanceLookup, DistanceView, Messages, Outcome};

pub const DEFAULT_PRE_REQUEST_DELAY: Duration = Duration::from_millis(3_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Time to wait between the trigger and sending the request.
    pub pre_request_delay: Duration,
    /// Only the most recently triggered lookup may update the view.
    pub discard_stale_responses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pre_request_delay: DEFAULT_PRE_REQUEST_DELAY,
            discard_stale_responses: true,
        }
    }
}

/// How a single lookup ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The outcome has been written into the view.
    Displayed(Outcome),
    /// A newer lookup was triggered meanwhile, the view is left untouched.
    Superseded,
}

/// Runs the round trip from the input fields over the
/// distance endpoint back into the result element.
///
/// Lookups are never cancelled. Triggering again while a lookup
/// is pending starts an independent one, every lookup gets a
/// request token that decides whether it may still update the view.
pub struct DistanceRequester<L, V> {
    lookup: L,
    view: V,
    settings: Settings,
    messages: Messages,
    latest_token: AtomicU64,
}

impl<L, V> DistanceRequester<L, V>
where
    L: DistanceLookup,
    V: DistanceView,
{
    pub const fn new(lookup: L, view: V, settings: Settings, messages: Messages) -> Self {
        Self {
            lookup,
            view,
            settings,
            messages,
            latest_token: AtomicU64::new(0),
        }
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Trigger a lookup.
    ///
    /// The addresses are read and the loading indicator is shown
    /// immediately, before the returned future is polled for the first time.
    pub fn calculate_distance(&self) -> impl Future<Output = Settlement> + '_ {
        let addresses = AddressPair::new(self.view.address1(), self.view.address2());
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        let loading = LoadingGuard::acquire(self, token);
        async move {
            tokio::time::sleep(self.settings.pre_request_delay).await;
            log::debug!(
                "Requesting distance #{token} between '{}' and '{}'",
                addresses.address1,
                addresses.address2
            );
            let outcome = Outcome::from(self.lookup.lookup(&addresses).await);
            if !loading.may_update_view() {
                log::debug!("Discarding stale response #{token}: {outcome:?}");
                return Settlement::Superseded;
            }
            self.view.set_result(&self.messages.render(&outcome));
            // Hiding the loading indicator is the final action
            drop(loading);
            Settlement::Displayed(outcome)
        }
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_token.load(Ordering::SeqCst) == token
    }
}

/// Shows the loading indicator while alive.
///
/// Dropping the guard hides the indicator again on every
/// exit path, including a lookup future that is dropped early.
struct LoadingGuard<'a, L, V>
where
    L: DistanceLookup,
    V: DistanceView,
{
    requester: &'a DistanceRequester<L, V>,
    token: u64,
}

impl<'a, L, V> LoadingGuard<'a, L, V>
where
    L: DistanceLookup,
    V: DistanceView,
{
    fn acquire(requester: &'a DistanceRequester<L, V>, token: u64) -> Self {
        requester.view.set_loading(true);
        requester.view.set_result("");
        Self { requester, token }
    }

    fn may_update_view(&self) -> bool {
        !self.requester.settings.discard_stale_responses || self.requester.is_latest(self.token)
    }
}

impl<L, V> Drop for LoadingGuard<'_, L, V>
where
    L: DistanceLookup,
    V: DistanceView,
{
    fn drop(&mut self) {
        if self.may_update_view() {
            self.requester.view.set_loading(false);
        }
    }
}
