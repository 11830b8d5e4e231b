//! View-model for the logs list: the fetched records, their page cursor,
//! load status and one submit gate per dialog.
//!
//! Mutations go to the server first. Only a confirmed response touches the
//! in-memory list; a failed call leaves it exactly as it was.

use std::num::NonZeroUsize;

use logbook_core::{LogInput, LogRecord, Pagination};

use crate::client::LogsClient;
use crate::error::ViewError;
use crate::submit::SubmitGate;

const LOAD_FAILED: &str = "Failed to load logs";
const LOAD_ONE_FAILED: &str = "Failed to load log data";
const CREATE_FAILED: &str = "Failed to create log";
const UPDATE_FAILED: &str = "Failed to update log";
const DELETE_FAILED: &str = "Failed to delete log";

/// Status of the full list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    /// Message for the full-panel error state.
    Failed(String),
}

#[derive(Debug)]
pub struct LogsView {
    client: LogsClient,
    pagination: Pagination<LogRecord>,
    load_state: LoadState,
    add_gate: SubmitGate,
    edit_gate: SubmitGate,
    delete_gate: SubmitGate,
}

impl LogsView {
    #[must_use]
    pub fn new(client: LogsClient, items_per_page: NonZeroUsize) -> Self {
        Self {
            client,
            pagination: Pagination::new(items_per_page),
            load_state: LoadState::Idle,
            add_gate: SubmitGate::new(),
            edit_gate: SubmitGate::new(),
            delete_gate: SubmitGate::new(),
        }
    }

    /// Discards the cached list and fetches it again.
    ///
    /// The list is cleared before the request, so a failed reload leaves an
    /// empty list on page 1 next to the [`LoadState::Failed`] message.
    ///
    /// # Errors
    /// The fetch failed; [`LoadState::Failed`] carries the same message.
    pub async fn load(&mut self) -> Result<(), ViewError> {
        self.pagination.reset();
        self.load_state = LoadState::Loading;
        match self.client.fetch_logs().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "logs loaded");
                self.pagination.initialize(items);
                self.load_state = LoadState::Ready;
                Ok(())
            },
            Err(source) => {
                let err = ViewError::Request { source, fallback: LOAD_FAILED };
                self.load_state = LoadState::Failed(err.user_message());
                Err(err)
            },
        }
    }

    /// Re-runs the same fetch as [`LogsView::load`].
    ///
    /// # Errors
    /// See [`LogsView::load`].
    pub async fn retry(&mut self) -> Result<(), ViewError> {
        self.load().await
    }

    /// Current server values of one record, for prefilling the edit form.
    ///
    /// # Errors
    /// The fetch failed.
    pub async fn edit_form(&self, id: i64) -> Result<LogInput, ViewError> {
        self.client
            .get_log(id)
            .await
            .map(|record| record.to_input())
            .map_err(|source| ViewError::Request { source, fallback: LOAD_ONE_FAILED })
    }

    /// Creates a record and appends the server's copy to the list.
    ///
    /// # Errors
    /// Invalid input, a submission already in flight, or a failed request.
    pub async fn create(&mut self, input: &LogInput) -> Result<LogRecord, ViewError> {
        let input = LogInput::new(&input.owner, &input.log_text);
        input.validate()?;
        let _ticket = self.add_gate.try_begin().ok_or(ViewError::Busy)?;
        let record = self
            .client
            .create_log(&input)
            .await
            .map_err(|source| ViewError::Request { source, fallback: CREATE_FAILED })?;
        self.pagination.apply_insert(record.clone());
        Ok(record)
    }

    /// Updates a record and replaces the cached copy in place.
    ///
    /// # Errors
    /// Invalid input, a submission already in flight, or a failed request.
    pub async fn update(&mut self, id: i64, input: &LogInput) -> Result<LogRecord, ViewError> {
        let input = LogInput::new(&input.owner, &input.log_text);
        input.validate()?;
        let _ticket = self.edit_gate.try_begin().ok_or(ViewError::Busy)?;
        let record = self
            .client
            .update_log(id, &input)
            .await
            .map_err(|source| ViewError::Request { source, fallback: UPDATE_FAILED })?;
        if !self.pagination.apply_update(id, record.clone()) {
            tracing::debug!(id, "updated log is not in the cached list");
        }
        Ok(record)
    }

    /// Deletes a record and drops it from the list.
    ///
    /// # Errors
    /// A submission already in flight, or a failed request.
    pub async fn delete(&mut self, id: i64) -> Result<(), ViewError> {
        let _ticket = self.delete_gate.try_begin().ok_or(ViewError::Busy)?;
        self.client
            .delete_log(id)
            .await
            .map_err(|source| ViewError::Request { source, fallback: DELETE_FAILED })?;
        self.pagination.apply_delete(id);
        Ok(())
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.pagination.go_to_page(page)
    }

    pub fn next_page(&mut self) -> usize {
        self.pagination.next_page()
    }

    pub fn prev_page(&mut self) -> usize {
        self.pagination.prev_page()
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination<LogRecord> {
        &self.pagination
    }

    #[must_use]
    pub fn page_items(&self) -> &[LogRecord] {
        self.pagination.page_items()
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// A UI keeps a clone of this gate to disable its control while a
    /// submission is in flight.
    #[must_use]
    pub const fn add_gate(&self) -> &SubmitGate {
        &self.add_gate
    }

    /// A UI keeps a clone of this gate to disable its control while a
    /// submission is in flight.
    #[must_use]
    pub const fn edit_gate(&self) -> &SubmitGate {
        &self.edit_gate
    }

    /// A UI keeps a clone of this gate to disable its control while a
    /// submission is in flight.
    #[must_use]
    pub const fn delete_gate(&self) -> &SubmitGate {
        &self.delete_gate
    }

    #[must_use]
    pub const fn client(&self) -> &LogsClient {
        &self.client
    }
}
