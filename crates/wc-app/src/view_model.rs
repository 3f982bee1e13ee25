use std::sync::Arc;

use tracing::{debug, warn};

use wc_core::catalog::{self, CatalogCandidate};
use wc_core::ports::{
    CatalogLookupPort, InventoryStoreError, InventoryStorePort, PhotoStorePort, PhotoUploadError,
};
use wc_core::wine::{stats, CellarStats, DraftEntry, WineRecord};
use wc_core::WineId;

/// Result of committing the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The store acknowledged the insert; the canonical record was appended
    /// to the mirror and the draft was reset.
    Committed(WineId),
    /// The draft has no name. Nothing was sent and nothing changed.
    MissingName,
}

/// Result of drinking one bottle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkOutcome {
    /// The store acknowledged the decrement and the mirror was updated.
    Confirmed { remaining: u32 },
    /// The id is not in the mirror. No store call was issued.
    UnknownId,
    /// The record is already at zero bottles. No store call was issued.
    Depleted,
}

/// The cellar view-model: the single mutator of the in-memory mirror.
///
/// Reconciliation contract: a mutation becomes visible in the mirror only
/// after the store confirms it. `load` is the only wholesale replace; every
/// other operation performs a targeted merge so concurrent local state is
/// never discarded. Store failures leave both the mirror and the draft
/// untouched so the user can retry.
pub struct CellarViewModel {
    inventory: Arc<dyn InventoryStorePort>,
    catalog: Arc<dyn CatalogLookupPort>,
    photos: Arc<dyn PhotoStorePort>,

    collection: Vec<WineRecord>,
    draft: DraftEntry,
    loading: bool,
    load_failed: bool,
    search_filter: String,
    catalog_term: String,
    catalog_results: Vec<CatalogCandidate>,
}

impl CellarViewModel {
    pub fn new(
        inventory: Arc<dyn InventoryStorePort>,
        catalog: Arc<dyn CatalogLookupPort>,
        photos: Arc<dyn PhotoStorePort>,
    ) -> Self {
        Self {
            inventory,
            catalog,
            photos,
            collection: Vec::new(),
            draft: DraftEntry::default(),
            loading: false,
            load_failed: false,
            search_filter: String::new(),
            catalog_term: String::new(),
            catalog_results: Vec::new(),
        }
    }

    /// Replace the mirror wholesale from the store.
    ///
    /// On failure the mirror is left empty and `load_failed` is set; the
    /// error is logged, never propagated. Mutations issued before the first
    /// successful load operate on an empty mirror, which is defined if
    /// degraded behavior.
    pub async fn load(&mut self) {
        self.loading = true;
        self.load_failed = false;
        match self.inventory.fetch_all().await {
            Ok(records) => {
                debug!(count = records.len(), "loaded cellar collection");
                self.collection = records;
            }
            Err(err) => {
                warn!(error = %err, "failed to load cellar collection");
                self.collection = Vec::new();
                self.load_failed = true;
            }
        }
        self.loading = false;
    }

    /// Persist the draft as a new record.
    ///
    /// An empty name is a local no-op (the form is simply not submitted).
    /// On store success the canonical returned record is appended to the
    /// mirror and the draft resets to the empty form; on store failure the
    /// draft stays intact and the mirror is unchanged.
    pub async fn commit_draft(&mut self) -> Result<CommitOutcome, InventoryStoreError> {
        if !self.draft.has_name() {
            return Ok(CommitOutcome::MissingName);
        }

        let record = self.inventory.insert(self.draft.to_new_record()).await?;
        let id = record.id.clone();
        debug!(id = %id, name = %record.name, "committed draft");
        self.collection.push(record);
        self.draft = DraftEntry::default();
        Ok(CommitOutcome::Committed(id))
    }

    /// Decrement one bottle from the record with the given id.
    ///
    /// Unknown ids and depleted records are idempotent no-ops with no store
    /// call. The mirror is decremented only after the store acknowledges,
    /// so it never shows a quantity the store has not confirmed. No
    /// automatic retry on failure.
    pub async fn drink_one(&mut self, id: &WineId) -> Result<DrinkOutcome, InventoryStoreError> {
        let Some(index) = self.collection.iter().position(|r| &r.id == id) else {
            return Ok(DrinkOutcome::UnknownId);
        };
        let quantity = self.collection[index].quantity;
        if quantity == 0 {
            return Ok(DrinkOutcome::Depleted);
        }

        let new_quantity = quantity - 1;
        self.inventory.update_quantity(id, new_quantity).await?;
        self.collection[index].quantity = new_quantity;
        debug!(id = %id, remaining = new_quantity, "drank one bottle");
        Ok(DrinkOutcome::Confirmed {
            remaining: new_quantity,
        })
    }

    /// Run a catalog search for the given term.
    ///
    /// Below the three-character threshold the results are cleared without
    /// touching the port. Transport failures are logged and swallowed; the
    /// result list is simply empty.
    pub async fn search_catalog(&mut self, term: &str) {
        self.catalog_term = term.to_string();
        if !catalog::term_is_searchable(term) {
            self.catalog_results.clear();
            return;
        }

        self.catalog_results = match self.catalog.search(term).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(error = %err, term, "catalog search failed");
                Vec::new()
            }
        };
    }

    /// Copy a catalog candidate into the draft (`wine` -> name, `winery` ->
    /// grape, `location` -> country), leaving all other draft fields
    /// untouched, then clear the catalog term and results. Pure local
    /// projection; no store interaction.
    pub fn apply_candidate(&mut self, candidate: &CatalogCandidate) {
        self.draft.name = candidate.wine.clone();
        self.draft.grape = candidate.winery.clone();
        self.draft.country = candidate.location.clone();
        self.catalog_term.clear();
        self.catalog_results.clear();
    }

    /// Upload a photo and attach its URL to the draft.
    ///
    /// On failure the draft's photo URL is left unchanged.
    pub async fn attach_photo(
        &mut self,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), PhotoUploadError> {
        match self.photos.upload(file_name, bytes).await {
            Ok(url) => {
                debug!(url = %url, "photo attached to draft");
                self.draft.photo_url = Some(url);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, file_name, "photo upload failed");
                Err(err)
            }
        }
    }

    pub fn set_search_filter(&mut self, filter: impl Into<String>) {
        self.search_filter = filter.into();
    }

    /// Records whose name contains the search filter, case-insensitively.
    /// Recomputed on every read; the collection is personal-inventory
    /// scale.
    pub fn filtered(&self) -> Vec<&WineRecord> {
        let needle = self.search_filter.to_lowercase();
        self.collection
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Aggregate statistics over the full mirror.
    pub fn stats(&self) -> CellarStats {
        stats::cellar_stats(&self.collection)
    }

    pub fn collection(&self) -> &[WineRecord] {
        &self.collection
    }

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    /// Mutable access for form field edits; commit rules still apply at
    /// [`commit_draft`](Self::commit_draft).
    pub fn draft_mut(&mut self) -> &mut DraftEntry {
        &mut self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn search_filter(&self) -> &str {
        &self.search_filter
    }

    pub fn catalog_term(&self) -> &str {
        &self.catalog_term
    }

    pub fn catalog_results(&self) -> &[CatalogCandidate] {
        &self.catalog_results
    }
}
