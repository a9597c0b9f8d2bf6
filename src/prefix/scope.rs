//! Request-scoped URL-generation prefix.
//!
//! Link generation deep inside handler code often has no request at hand.
//! The prefix is therefore also published in a task-local slot that lives
//! exactly as long as one request's future. Once that future completes the
//! slot is gone; a worker picking up the next request starts empty.
//!
//! Tasks spawned from a handler do not inherit the slot. Pass the
//! `MountState` along explicitly in that case.

use std::future::Future;

use tokio::task::futures::TaskLocalFuture;

use crate::prefix::resolver::MountPrefix;

tokio::task_local! {
    static URL_PREFIX: Option<MountPrefix>;
}

/// Run `fut` with `prefix` as the URL-generation prefix.
pub fn scope<F: Future>(prefix: Option<MountPrefix>, fut: F) -> TaskLocalFuture<Option<MountPrefix>, F> {
    URL_PREFIX.scope(prefix, fut)
}

/// Prefix of the request currently being served, if any.
pub fn current_prefix() -> Option<MountPrefix> {
    URL_PREFIX.try_with(|p| p.clone()).ok().flatten()
}
