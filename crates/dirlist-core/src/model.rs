//! The data model for the currently loaded directory.
//!
//! [`DirectoryModel`] turns each snapshot delivered by a loader into an
//! ordered list of model ids plus an id → row-position map, and tells its
//! [`UpdateListener`]s whenever that happens. Every refresh rebuilds the
//! state from scratch; rows are never patched in place.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, error};

use crate::config::settings::Config;
use crate::error::{CoreError, CoreResult, LoadError};
use crate::record::{build_id, is_dir_mime, string_or_empty, ColumnMap, DocumentRecord};
use crate::sort::{sort_rows, SortKey, SortOrder, SortRow};
use crate::source::RecordSource;

/// What a directory loader hands to [`DirectoryModel::update`].
#[derive(Debug)]
pub enum DirectoryResult<S> {
    /// No directory is active; the model empties itself.
    Cleared,
    /// Loading failed upstream. The model keeps its previous state.
    Failed(LoadError),
    /// A fresh snapshot of the directory.
    Loaded(Snapshot<S>),
}

/// One full read of a directory.
#[derive(Debug)]
pub struct Snapshot<S> {
    pub source: S,
    /// Order to sort this snapshot by.
    pub sort_order: SortOrder,
    /// The directory the rows belong to, if known.
    pub doc: Option<DocumentRecord>,
}

impl<S> Snapshot<S> {
    pub fn new(source: S, sort_order: SortOrder) -> Self {
        Self {
            source,
            sort_order,
            doc: None,
        }
    }

    #[must_use]
    pub fn with_doc(self, doc: DocumentRecord) -> Self {
        Self {
            doc: Some(doc),
            ..self
        }
    }
}

/// Receives model refresh notifications.
pub trait UpdateListener<S> {
    /// Called after a successful update (including a clear).
    fn on_update(&self, model: &DirectoryModel<S>);

    /// Called when an update was attempted but failed.
    fn on_update_failed(&self, error: &LoadError);
}

/// Handle returned by [`DirectoryModel::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Sorted index over the rows of the current directory snapshot.
pub struct DirectoryModel<S> {
    source: Option<S>,
    columns: ColumnMap,
    /// Model ids in display order.
    ids: Vec<String>,
    /// Model id → row position in `source`.
    positions: HashMap<String, usize>,
    sort_order: SortOrder,
    is_loading: bool,
    info: Option<String>,
    error: Option<String>,
    doc: Option<DocumentRecord>,
    listeners: Vec<(ListenerId, Box<dyn UpdateListener<S>>)>,
    next_listener: u64,
}

impl<S> Default for DirectoryModel<S> {
    fn default() -> Self {
        Self {
            source: None,
            columns: ColumnMap::default(),
            ids: Vec::new(),
            positions: HashMap::new(),
            sort_order: SortOrder::default(),
            is_loading: false,
            info: None,
            error: None,
            doc: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }
}

impl<S> fmt::Debug for DirectoryModel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryModel")
            .field("item_count", &self.ids.len())
            .field("sort_order", &self.sort_order)
            .field("is_loading", &self.is_loading)
            .field("info", &self.info)
            .field("error", &self.error)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<S: RecordSource> DirectoryModel<S> {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty model whose initial sort order comes from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            sort_order: config.general.default_sort,
            ..Self::default()
        }
    }

    /// Applies a loader result and notifies listeners.
    pub fn update(&mut self, result: DirectoryResult<S>) {
        debug!("updating model with new result set");

        match result {
            DirectoryResult::Cleared => {
                self.clear();
                self.notify_update();
            }
            DirectoryResult::Failed(err) => {
                error!(error = %err, "error while loading directory contents");
                self.notify_failed(&err);
            }
            DirectoryResult::Loaded(snapshot) => {
                self.load(snapshot);
                self.notify_update();
            }
        }
    }

    fn clear(&mut self) {
        self.source = None;
        self.columns = ColumnMap::default();
        self.ids.clear();
        self.positions.clear();
        self.info = None;
        self.error = None;
        self.doc = None;
        self.is_loading = false;
    }

    fn load(&mut self, snapshot: Snapshot<S>) {
        let Snapshot {
            source,
            sort_order,
            doc,
        } = snapshot;

        let columns = ColumnMap::resolve(&source);
        if columns.source_id.is_none() || columns.document_id.is_none() {
            debug!(
                has_source_id = columns.source_id.is_some(),
                has_document_id = columns.document_id.is_some(),
                "snapshot is missing id columns; model ids will be partial"
            );
        }

        let mut rows = collect_rows(&source, &columns, sort_order);
        sort_rows(&mut rows);

        let mut positions = HashMap::with_capacity(rows.len());
        let ids: Vec<String> = rows
            .into_iter()
            .map(|row| {
                positions.insert(row.id.clone(), row.position);
                row.id
            })
            .collect();

        debug!(count = ids.len(), %sort_order, "model updated");

        self.ids = ids;
        self.positions = positions;
        self.columns = columns;
        self.sort_order = sort_order;
        self.doc = doc;
        // Metadata is only replaced when the provider sent a bundle.
        if let Some(extras) = source.extras() {
            self.info = extras.info.clone();
            self.error = extras.error.clone();
            self.is_loading = extras.loading.unwrap_or(false);
        }
        self.source = Some(source);
    }

    /// Reads the full record for `id`, or `None` if the id is not loaded.
    pub fn get_item(&self, id: &str) -> Option<DocumentRecord> {
        let position = *self.positions.get(id)?;
        let source = self.source.as_ref()?;
        Some(DocumentRecord::read(source, position, &self.columns))
    }

    /// Reads the full records for `ids`, in the order given.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnknownEntry`] if any id is not part of the current
    /// snapshot. Ids must come from [`model_ids`](Self::model_ids).
    pub fn get_documents<I>(&self, ids: I) -> CoreResult<Vec<DocumentRecord>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| {
                let id = id.as_ref();
                self.get_item(id).ok_or_else(|| {
                    error!(id, "lookup of an id that is not in the model");
                    CoreError::UnknownEntry(id.to_string())
                })
            })
            .collect()
    }
}

impl<S> DirectoryModel<S> {
    /// Registers `listener`; it is called after every later update.
    pub fn add_listener(&mut self, listener: Box<dyn UpdateListener<S>>) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify_update(&self) {
        for (_, listener) in &self.listeners {
            listener.on_update(self);
        }
    }

    fn notify_failed(&self, err: &LoadError) {
        for (_, listener) in &self.listeners {
            listener.on_update_failed(err);
        }
    }

    /// Row position of `id` in the current snapshot.
    pub fn get_position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Model ids, sorted by the order of the last update.
    pub fn model_ids(&self) -> &[String] {
        &self.ids
    }

    pub fn item_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// `true` while the provider reports that more rows are on the way.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The directory this listing belongs to.
    pub fn doc(&self) -> Option<&DocumentRecord> {
        self.doc.as_ref()
    }
}

fn collect_rows<S: RecordSource>(
    source: &S,
    columns: &ColumnMap,
    sort_order: SortOrder,
) -> Vec<SortRow> {
    (0..source.row_count())
        .map(|position| {
            let id = build_id(
                &string_or_empty(source, position, columns.source_id),
                &string_or_empty(source, position, columns.document_id),
            );
            let is_dir = is_dir_mime(&string_or_empty(source, position, columns.mime_type));
            SortRow {
                position,
                id,
                is_dir,
                key: SortKey::extract(source, position, columns, sort_order),
            }
        })
        .collect()
}
