//! Collection page listing state.
//!
//! A [`Listing`] accumulates successive result pages for one filter
//! configuration into a growing, displayable list. The one correctness
//! hazard here is a fetch resolving after the filter it was issued under
//! has changed; the listing guards against that with a generation counter
//! captured in each [`PageSnapshot`] and checked when results are applied.

use crate::backend::CatalogBackend;
use crate::error::CatalogError;
use crate::filter::{ListingFilter, SortKey};
use crate::page::ProductPage;
use crate::query::{ProductQuery, DEFAULT_PAGE_SIZE};
use partyhaul_commerce::catalog::Product;

/// Lifecycle of the listing's current fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingPhase {
    /// Nothing fetched yet for the current filter.
    #[default]
    Idle,
    /// A page request is outstanding.
    Loading,
    /// At least one page has been applied.
    Ready,
    /// The last fetch failed. Previously loaded pages are kept.
    Failed(String),
}

/// Result of a [`Listing::load_more`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and its products appended.
    Appended(usize),
    /// The accumulated list already covers the full result set.
    NoMore,
}

/// An issued page request: the filter snapshot, offset and generation it
/// was composed under.
///
/// Results are applied back through [`Listing::apply_page`], which
/// discards them if the listing's filter has changed in the meantime.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    filter: ListingFilter,
    offset: i64,
    limit: i64,
    generation: u64,
}

impl PageSnapshot {
    /// The filter this request was composed under.
    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    /// Compose the backend query once the category slug is resolved.
    pub fn query(&self, category_id: Option<partyhaul_commerce::CategoryId>) -> ProductQuery {
        ProductQuery::compose(&self.filter, category_id, self.offset, self.limit)
    }
}

/// Accumulated, filterable product listing for the collection page.
///
/// The accumulated list is always a strict prefix, in request order, of
/// the full result set for the current filter. Changing any filter
/// dimension discards it and restarts pagination at offset 0.
#[derive(Debug, Clone)]
pub struct Listing {
    filter: ListingFilter,
    products: Vec<Product>,
    total: Option<i64>,
    page_size: i64,
    generation: u64,
    phase: ListingPhase,
}

impl Listing {
    /// Create a listing with the default filter and page size.
    pub fn new() -> Self {
        Self {
            filter: ListingFilter::new(),
            products: Vec::new(),
            total: None,
            page_size: DEFAULT_PAGE_SIZE,
            generation: 0,
            phase: ListingPhase::Idle,
        }
    }

    /// Create a listing with a custom page size.
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size.clamp(1, 100);
        self
    }

    /// The active filter configuration.
    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    /// Replace the filter configuration.
    ///
    /// Any change discards the accumulated list, forgets the total and
    /// restarts pagination at offset 0. In-flight fetches issued under
    /// the old filter will be discarded when they resolve. Setting an
    /// identical filter is a no-op.
    pub fn set_filter(&mut self, filter: ListingFilter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.products.clear();
        self.total = None;
        self.generation += 1;
        self.phase = ListingPhase::Idle;
    }

    /// Set the category slug, keeping the other filter dimensions.
    pub fn set_category_slug(&mut self, slug: Option<&str>) {
        let mut filter = self.filter.clone();
        filter.category_slug = slug.map(str::to_string);
        self.set_filter(filter);
    }

    /// Set the search string, keeping the other filter dimensions.
    /// An empty string clears the search.
    pub fn set_search(&mut self, search: &str) {
        let mut filter = self.filter.clone();
        filter.search = if search.is_empty() {
            None
        } else {
            Some(search.to_string())
        };
        self.set_filter(filter);
    }

    /// Set the sort key, keeping the other filter dimensions.
    pub fn set_sort(&mut self, sort: SortKey) {
        let mut filter = self.filter.clone();
        filter.sort = sort;
        self.set_filter(filter);
    }

    /// Toggle out-of-stock visibility, keeping the other dimensions.
    pub fn set_show_out_of_stock(&mut self, show: bool) {
        let mut filter = self.filter.clone();
        filter.show_out_of_stock = show;
        self.set_filter(filter);
    }

    /// Whether more results exist beyond the accumulated list.
    ///
    /// True until the first page reports a total.
    pub fn has_more(&self) -> bool {
        match self.total {
            Some(total) => (self.products.len() as i64) < total,
            None => true,
        }
    }

    /// Server-reported total match count, once known.
    pub fn total_count(&self) -> Option<i64> {
        self.total
    }

    /// Number of products loaded so far.
    pub fn loaded_len(&self) -> usize {
        self.products.len()
    }

    /// The accumulated products in request order, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current fetch phase.
    pub fn phase(&self) -> &ListingPhase {
        &self.phase
    }

    /// Issue the next page request, or None when the accumulated list
    /// already covers the reported total ("no more results" is a no-op,
    /// not an error).
    pub fn next_request(&mut self) -> Option<PageSnapshot> {
        if !self.has_more() {
            return None;
        }
        self.phase = ListingPhase::Loading;
        Some(PageSnapshot {
            filter: self.filter.clone(),
            offset: self.products.len() as i64,
            limit: self.page_size,
            generation: self.generation,
        })
    }

    /// Apply a fetched page.
    ///
    /// Returns false and leaves the listing untouched when the snapshot
    /// predates a filter change; the stale results must not be spliced
    /// into the visible list. The discard is silent otherwise.
    pub fn apply_page(&mut self, snapshot: &PageSnapshot, page: ProductPage) -> bool {
        if snapshot.generation != self.generation {
            tracing::warn!(
                stale_generation = snapshot.generation,
                current_generation = self.generation,
                "discarding page fetched under a superseded filter"
            );
            return false;
        }

        self.total = Some(page.total);
        self.products.extend(page.products);

        // A short page means the prefix is complete even if the reported
        // total says otherwise; never re-request the same offset forever.
        let loaded = self.products.len() as i64;
        if loaded < page.total && loaded < snapshot.offset + snapshot.limit {
            self.total = Some(loaded);
        }

        self.phase = ListingPhase::Ready;
        true
    }

    /// Record a fetch failure.
    ///
    /// Previously loaded pages are preserved; only the phase changes so
    /// the display surface can render an error/retry affordance. Stale
    /// failures (superseded filter) are discarded like stale pages.
    pub fn apply_error(&mut self, snapshot: &PageSnapshot, error: &CatalogError) -> bool {
        if snapshot.generation != self.generation {
            return false;
        }
        tracing::warn!(error = %error, "catalog page fetch failed");
        self.phase = ListingPhase::Failed(error.to_string());
        true
    }

    /// Fetch and apply the next page from the backend.
    ///
    /// Resolves the category slug first (an unknown slug yields an empty
    /// result set, not an error), composes the query from the current
    /// filter snapshot, and appends the page. On failure the phase moves
    /// to [`ListingPhase::Failed`] and the error propagates; loaded pages
    /// are kept.
    pub async fn load_more<B: CatalogBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Result<LoadOutcome, CatalogError> {
        let Some(snapshot) = self.next_request() else {
            return Ok(LoadOutcome::NoMore);
        };

        match fetch_page(backend, &snapshot).await {
            Ok(page) => {
                let before = self.products.len();
                self.apply_page(&snapshot, page);
                Ok(LoadOutcome::Appended(self.products.len() - before))
            }
            Err(error) => {
                self.apply_error(&snapshot, &error);
                Err(error)
            }
        }
    }

    /// The accumulated products as the collection page displays them.
    ///
    /// Out-of-stock products are hidden unless the filter shows them,
    /// then the local sort is applied. The sort covers only the loaded
    /// prefix: it is a display convenience, not a cross-page ordering
    /// guarantee over unfetched results.
    pub fn visible_products(&self) -> Vec<&Product> {
        let mut visible: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| self.filter.show_out_of_stock || p.stock_status.is_available())
            .collect();

        match self.filter.sort {
            SortKey::Recommended => {}
            SortKey::PriceLow => visible.sort_by_key(|p| p.price),
            SortKey::PriceHigh => visible.sort_by_key(|p| std::cmp::Reverse(p.price)),
            SortKey::Name => visible.sort_by_key(|p| p.name.to_lowercase()),
        }

        visible
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the snapshot's category slug and fetch its page.
///
/// Split out of [`Listing::load_more`] so callers driving the two-phase
/// API (issue snapshot, await, apply) can reuse the composition logic.
pub async fn fetch_page<B: CatalogBackend + ?Sized>(
    backend: &B,
    snapshot: &PageSnapshot,
) -> Result<ProductPage, CatalogError> {
    let category_id = match &snapshot.filter().category_slug {
        Some(slug) => match backend.category_by_slug(slug).await? {
            Some(category) => Some(category.id),
            // Unknown slug: empty result set rather than an error.
            None => return Ok(ProductPage::empty()),
        },
        None => None,
    };

    let query = snapshot.query(category_id);
    tracing::debug!(
        offset = query.offset,
        limit = query.limit,
        category = query.category_id.as_ref().map(|c| c.as_str()),
        search = query.search.as_deref(),
        "fetching catalog page"
    );
    backend.products(&query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCatalog;
    use partyhaul_commerce::catalog::{Category, StockStatus};
    use partyhaul_commerce::Money;

    fn plush_catalog(count: usize) -> MemoryCatalog {
        let plush = Category::new("plush-toys", "Plush Toys");
        let products: Vec<_> = (0..count)
            .map(|i| {
                let mut p = Product::new(
                    format!("plush-{i:03}"),
                    format!("Plush Animal {i:03}"),
                    Money::new(100 + i as i64),
                );
                p.category_id = Some(plush.id.clone());
                p.position = i as i64;
                p
            })
            .collect();
        MemoryCatalog::new()
            .with_categories([plush])
            .with_products(products)
    }

    #[tokio::test]
    async fn test_load_more_accumulates_without_dups_or_gaps() {
        // 60 matching items at the default page size of 24.
        let catalog = plush_catalog(60);
        let mut listing = Listing::new();
        listing.set_category_slug(Some("plush-toys"));

        assert_eq!(
            listing.load_more(&catalog).await.unwrap(),
            LoadOutcome::Appended(24)
        );
        assert_eq!(
            listing.load_more(&catalog).await.unwrap(),
            LoadOutcome::Appended(24)
        );
        assert_eq!(
            listing.load_more(&catalog).await.unwrap(),
            LoadOutcome::Appended(12)
        );
        assert!(!listing.has_more());
        assert_eq!(
            listing.load_more(&catalog).await.unwrap(),
            LoadOutcome::NoMore
        );

        assert_eq!(listing.loaded_len(), 60);
        assert_eq!(listing.total_count(), Some(60));
        assert_eq!(*listing.phase(), ListingPhase::Ready);

        // Strict prefix in request order: no duplicate, no gap.
        for (i, product) in listing.products().iter().enumerate() {
            assert_eq!(product.slug, format!("plush-{i:03}"));
        }
    }

    #[tokio::test]
    async fn test_filter_change_resets_accumulation() {
        let catalog = plush_catalog(60);
        let mut listing = Listing::new();
        listing.set_category_slug(Some("plush-toys"));

        for _ in 0..3 {
            listing.load_more(&catalog).await.unwrap();
        }
        assert_eq!(listing.loaded_len(), 60);

        listing.set_search("Animal 00");
        assert_eq!(listing.loaded_len(), 0);
        assert_eq!(listing.total_count(), None);
        assert_eq!(*listing.phase(), ListingPhase::Idle);

        listing.load_more(&catalog).await.unwrap();
        assert_eq!(listing.loaded_len(), 10); // 000..009
        // Category filter survived the search change.
        assert_eq!(listing.filter().category_slug.as_deref(), Some("plush-toys"));
    }

    #[tokio::test]
    async fn test_clearing_search_keeps_category_and_restarts() {
        let catalog = plush_catalog(30);
        let mut listing = Listing::new();
        listing.set_filter(
            ListingFilter::new()
                .with_category_slug("plush-toys")
                .with_search("Animal 01"),
        );

        listing.load_more(&catalog).await.unwrap();
        assert_eq!(listing.loaded_len(), 10);

        listing.set_search("");
        assert_eq!(listing.loaded_len(), 0);
        listing.load_more(&catalog).await.unwrap();
        assert_eq!(listing.total_count(), Some(30));
        assert_eq!(listing.filter().category_slug.as_deref(), Some("plush-toys"));
    }

    #[tokio::test]
    async fn test_identical_filter_is_noop() {
        let catalog = plush_catalog(10);
        let mut listing = Listing::new();
        listing.set_category_slug(Some("plush-toys"));
        listing.load_more(&catalog).await.unwrap();

        listing.set_category_slug(Some("plush-toys"));
        assert_eq!(listing.loaded_len(), 10);
    }

    #[tokio::test]
    async fn test_stale_snapshot_discarded() {
        let catalog = plush_catalog(60);
        let mut listing = Listing::new();
        listing.set_category_slug(Some("plush-toys"));

        // Issue a request, then change the filter before it resolves.
        let snapshot = listing.next_request().unwrap();
        let page = fetch_page(&catalog, &snapshot).await.unwrap();
        listing.set_search("Animal 05");

        assert!(!listing.apply_page(&snapshot, page));
        assert_eq!(listing.loaded_len(), 0);
        assert_eq!(listing.total_count(), None);

        // The fresh filter still loads normally afterwards.
        listing.load_more(&catalog).await.unwrap();
        assert_eq!(listing.loaded_len(), 10);
    }

    #[tokio::test]
    async fn test_unknown_slug_yields_empty_results() {
        let catalog = plush_catalog(10);
        let mut listing = Listing::new();
        listing.set_category_slug(Some("no-such-category"));

        assert_eq!(
            listing.load_more(&catalog).await.unwrap(),
            LoadOutcome::Appended(0)
        );
        assert_eq!(listing.total_count(), Some(0));
        assert!(!listing.has_more());
        assert_eq!(*listing.phase(), ListingPhase::Ready);
    }

    #[tokio::test]
    async fn test_visible_products_hide_out_of_stock_and_sort_locally() {
        let plush = Category::new("plush-toys", "Plush Toys");

        let mut cheap = Product::new("plush-frog", "Frog", Money::new(199));
        cheap.category_id = Some(plush.id.clone());
        cheap.position = 0;

        let mut gone = Product::new("plush-dodo", "Dodo", Money::new(99));
        gone.category_id = Some(plush.id.clone());
        gone.stock_status = StockStatus::OutOfStock;
        gone.position = 1;

        let mut dear = Product::new("plush-axolotl", "Axolotl", Money::new(899));
        dear.category_id = Some(plush.id.clone());
        dear.position = 2;

        let catalog = MemoryCatalog::new()
            .with_categories([plush])
            .with_products([cheap, gone, dear]);

        let mut listing = Listing::new();
        listing.set_category_slug(Some("plush-toys"));
        listing.load_more(&catalog).await.unwrap();

        // Out of stock hidden by default, server order preserved.
        let names: Vec<&str> = listing.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Frog", "Axolotl"]);

        listing.set_show_out_of_stock(true);
        listing.load_more(&catalog).await.unwrap();
        assert_eq!(listing.visible_products().len(), 3);

        listing.set_sort(SortKey::PriceHigh);
        listing.load_more(&catalog).await.unwrap();
        let names: Vec<&str> = listing.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Axolotl", "Frog", "Dodo"]);

        listing.set_sort(SortKey::Name);
        listing.load_more(&catalog).await.unwrap();
        let names: Vec<&str> = listing.visible_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Axolotl", "Dodo", "Frog"]);
    }
}
