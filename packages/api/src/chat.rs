//! Chat-side helpers that sit on top of [`ApiClient`].

use store::UnreadCounter;

use crate::ApiClient;

/// Somewhere an [`UnreadCounter`] lives.
///
/// [`refresh_unread`] only touches the counter briefly before and after the
/// request, so holders that cannot lend a `&mut` across an await (reactive
/// signals, cells) can still take part.
pub trait UnreadTarget {
    fn update<R>(&mut self, f: impl FnOnce(&mut UnreadCounter) -> R) -> R;
}

impl UnreadTarget for &mut UnreadCounter {
    fn update<R>(&mut self, f: impl FnOnce(&mut UnreadCounter) -> R) -> R {
        f(self)
    }
}

/// Fetch the unread count for `user_id` and fold it into `target`.
///
/// Returns whether the count changed. A failed fetch, a rejected body, or a
/// response overtaken by a newer fetch leaves the counter as it is.
pub async fn refresh_unread(
    client: &ApiClient,
    mut target: impl UnreadTarget,
    user_id: u64,
) -> bool {
    let ticket = target.update(|counter| counter.begin());
    let result = client.unread_count(user_id).await;
    target.update(|counter| counter.complete(ticket, result))
}
