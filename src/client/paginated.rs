//! Cursor-link pagination.
//!
//! List endpoints return a `pagination` block whose `next_link` and
//! `previous_link` are absolute URLs. [`PageStream`] follows those links one
//! page at a time; [`OneLoginClient::next_pages`] and
//! [`OneLoginClient::previous_pages`] collect a bounded number of pages.
//!
//! Traversal is strictly sequential: each fetch depends on the link in the
//! page before it. Only links on the same origin as the API base URL are
//! followed, since every request carries the bearer token.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::{ClientInner, OneLoginClient};
use crate::models::Pageable;
use crate::{Error, Result};

/// Which link a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow `next_link`.
    Forward,
    /// Follow `previous_link`.
    Backward,
}

impl Direction {
    fn link_of<'a, T: Pageable>(&self, page: &'a T) -> Option<&'a str> {
        match self {
            Direction::Forward => page.next_link(),
            Direction::Backward => page.previous_link(),
        }
    }
}

/// How many pages a walk may fetch.
///
/// There is no implicit default. [`PageLimit::Unbounded`] keeps fetching for
/// as long as the server hands out links, which on a large tenant can mean a
/// great many requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    /// Fetch at most this many pages.
    Pages(usize),
    /// Fetch until the links run out.
    Unbounded,
}

impl PageLimit {
    fn allows(&self, fetched: usize) -> bool {
        match self {
            PageLimit::Pages(max) => fetched < *max,
            PageLimit::Unbounded => true,
        }
    }
}

impl From<usize> for PageLimit {
    fn from(pages: usize) -> Self {
        PageLimit::Pages(pages)
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stream that lazily fetches pages by following cursor links.
///
/// Yields whole pages (the decoded envelopes), not the items inside them.
/// The stream ends when a page has no followable link in the walk's
/// direction, and stops after the first error. A fired cancellation token
/// is reported as [`Error::Cancelled`] before the next page is requested.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use onelogin_rs::client::Direction;
///
/// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
/// let first = client.users().list(None).await?;
///
/// let mut pages = client.page_stream(&first, Direction::Forward);
/// while let Some(page) = pages.next().await {
///     let users = page?.ensure_success()?.unwrap_or_default();
///     println!("{} more users", users.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct PageStream<T> {
    inner: Arc<ClientInner>,
    direction: Direction,
    /// Link of the next page to fetch, None if exhausted.
    pending_link: Option<String>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<T>>>,
}

impl<T> PageStream<T>
where
    T: DeserializeOwned + Pageable + Send + 'static,
{
    pub(crate) fn new(inner: Arc<ClientInner>, source: &T, direction: Direction) -> Self {
        let pending_link = followable(inner.tokens.base_url(), direction.link_of(source));
        Self {
            inner,
            direction,
            pending_link,
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PageStream<T>
where
    T: DeserializeOwned + Pageable + Send + 'static,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(ref mut fut) = this.pending_fetch {
                return match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.pending_link =
                            followable(this.inner.tokens.base_url(), this.direction.link_of(&page));
                        Poll::Ready(Some(Ok(page)))
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.pending_link = None; // Stop on error
                        Poll::Ready(Some(Err(e)))
                    }
                    Poll::Pending => Poll::Pending,
                };
            }

            match this.pending_link.take() {
                Some(_) if this.inner.cancellation().is_cancelled() => {
                    return Poll::Ready(Some(Err(Error::Cancelled)));
                }
                Some(link) => {
                    debug!(direction = ?this.direction, %link, "Fetching page");
                    let inner = this.inner.clone();
                    this.pending_fetch = Some(Box::pin(async move { inner.get::<T>(&link).await }));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PageStream<T> {}

impl OneLoginClient {
    /// Lazily walk the pages linked from `source` in the given direction.
    pub fn page_stream<T>(&self, source: &T, direction: Direction) -> PageStream<T>
    where
        T: DeserializeOwned + Pageable + Send + 'static,
    {
        PageStream::new(self.inner.clone(), source, direction)
    }

    /// Fetch the pages after `source` by following `next_link`.
    ///
    /// The result is in link order and does not include `source` itself.
    /// Any failed fetch aborts the walk.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use onelogin_rs::client::PageLimit;
    ///
    /// # async fn example(client: onelogin_rs::OneLoginClient) -> onelogin_rs::Result<()> {
    /// let first = client.events().list(None).await?;
    /// let more = client.next_pages(&first, PageLimit::Pages(5)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn next_pages<T>(&self, source: &T, limit: PageLimit) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Pageable + Send + 'static,
    {
        collect_pages(self.page_stream(source, Direction::Forward), limit).await
    }

    /// Fetch the pages before `source` by following `previous_link`.
    ///
    /// The mirror image of [`next_pages`](Self::next_pages): pages come back
    /// in traversal order, nearest first.
    pub async fn previous_pages<T>(&self, source: &T, limit: PageLimit) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Pageable + Send + 'static,
    {
        collect_pages(self.page_stream(source, Direction::Backward), limit).await
    }
}

async fn collect_pages<T>(mut stream: PageStream<T>, limit: PageLimit) -> Result<Vec<T>>
where
    T: DeserializeOwned + Pageable + Send + 'static,
{
    let mut pages = Vec::new();

    while limit.allows(pages.len()) {
        match stream.next().await {
            Some(page) => pages.push(page?),
            None => break,
        }
    }

    Ok(pages)
}

/// Keep `link` only if it is an absolute URL on the same origin as `base`.
fn followable(base: &Url, link: Option<&str>) -> Option<String> {
    let link = link?;
    let url = Url::parse(link).ok().filter(Url::has_host)?;

    if url.origin() != base.origin() {
        warn!(%link, base = %base, "Ignoring pagination link to a foreign origin");
        return None;
    }
    Some(link.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pagination, ResponseEnvelope, Status};

    fn page(next: Option<&str>, previous: Option<&str>) -> ResponseEnvelope<Vec<i64>> {
        ResponseEnvelope {
            status: Status {
                error: false,
                code: 200,
                kind: Some("success".into()),
                message: None,
            },
            data: Some(vec![]),
            pagination: Some(Pagination {
                next_link: next.map(String::from),
                previous_link: previous.map(String::from),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_followable_links() {
        let base = Url::parse("https://api.us.onelogin.com/").unwrap();
        let link = "https://api.us.onelogin.com/api/1/users?after_cursor=x";

        assert_eq!(followable(&base, Some(link)).as_deref(), Some(link));
        assert!(followable(&base, None).is_none());
        assert!(followable(&base, Some("")).is_none());
        assert!(followable(&base, Some("/api/1/users?after_cursor=x")).is_none());
        assert!(followable(&base, Some("not a url")).is_none());
    }

    #[test]
    fn test_foreign_origin_links_are_not_followed() {
        let base = Url::parse("https://api.us.onelogin.com/").unwrap();

        for link in [
            "https://attacker.example/api/1/users?after_cursor=x",
            "http://api.us.onelogin.com/api/1/users?after_cursor=x",
            "https://api.us.onelogin.com:8443/api/1/users?after_cursor=x",
            "https://api.eu.onelogin.com/api/1/users?after_cursor=x",
        ] {
            assert!(followable(&base, Some(link)).is_none(), "{link}");
        }
    }

    #[test]
    fn test_direction_picks_link() {
        let page = page(Some("https://a.example/next"), Some("https://a.example/prev"));
        assert_eq!(Direction::Forward.link_of(&page), Some("https://a.example/next"));
        assert_eq!(Direction::Backward.link_of(&page), Some("https://a.example/prev"));
    }

    #[test]
    fn test_page_limit() {
        assert!(!PageLimit::Pages(0).allows(0));
        assert!(PageLimit::Pages(2).allows(1));
        assert!(!PageLimit::Pages(2).allows(2));
        assert!(PageLimit::Unbounded.allows(usize::MAX));
        assert_eq!(PageLimit::from(3), PageLimit::Pages(3));
    }

    #[tokio::test]
    async fn test_no_link_yields_nothing() {
        let client = OneLoginClient::us("id", "secret").unwrap();
        let source = page(None, Some("relative/only"));

        let forward = client.next_pages(&source, PageLimit::Unbounded).await.unwrap();
        let backward = client.previous_pages(&source, PageLimit::Unbounded).await.unwrap();

        assert!(forward.is_empty());
        assert!(backward.is_empty());
        // Nothing was fetched, so no token exchange either.
        assert!(!client.is_authenticated());
    }
}
