//! Page walking for list endpoints.
//!
//! A handful of list endpoints are paginated with `page`/`per_page` query
//! parameters. Callers either ask for one explicit page, or let [`walk`]
//! request pages 1, 2, ... at a fixed page size until a short page comes
//! back.

use std::future::Future;

use tracing::debug;

use crate::error::ApiError;
use crate::params::Params;

/// Page size used when walking all products.
pub const PRODUCTS_PER_PAGE: u32 = 500;
/// Page size used when walking all backend APIs.
pub const BACKENDS_PER_PAGE: u32 = 500;
/// Page size used when walking all developer accounts.
pub const DEVELOPER_ACCOUNTS_PER_PAGE: u32 = 500;
/// Page size used when walking all account proxy configs.
pub const PROXY_CONFIGS_PER_PAGE: u32 = 500;

/// One page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
}

impl Pagination {
    /// Creates a page request.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// The `page` and `per_page` query parameters.
    pub fn params(&self) -> Params {
        Params::from([
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ])
    }
}

/// A list response that can be split into items and rebuilt from them.
pub trait Paginated: Sized {
    /// The element type.
    type Item;

    /// Consumes the list, returning its items in server order.
    fn into_items(self) -> Vec<Self::Item>;

    /// Rebuilds a list from accumulated items.
    fn from_items(items: Vec<Self::Item>) -> Self;
}

/// Requests successive pages of `per_page` items until a page holds fewer
/// than `per_page` items, and concatenates them in request order.
///
/// Pages are fetched one at a time. The first failing page aborts the walk
/// and its error is returned; items from earlier pages are dropped.
///
/// ## Examples
///
/// ```rust,ignore
/// let all = pagination::walk(PRODUCTS_PER_PAGE, move |page| {
///     self.list_products_per_page(page.page, page.per_page)
/// })
/// .await?;
/// ```
pub async fn walk<P, Fetch, Fut>(per_page: u32, mut fetch: Fetch) -> Result<P, ApiError>
where
    P: Paginated,
    Fetch: FnMut(Pagination) -> Fut,
    Fut: Future<Output = Result<P, ApiError>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let batch = fetch(Pagination::new(page, per_page)).await?.into_items();
        let received = batch.len();
        items.extend(batch);
        debug!(page, received, total = items.len(), "fetched page");

        if received < per_page as usize {
            break;
        }
        page += 1;
    }

    Ok(P::from_items(items))
}
