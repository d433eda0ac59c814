//! Local view of the student list with per-row change detection.

use roster_types::{CreatedResponse, Field, StudentFields, StudentId, StudentRecord, ValidationError};
use tracing::{debug, info, warn};

use crate::{ClientError, ClientResult, StudentsClient};

/// Edit state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// Trimmed draft equals the last-fetched values.
    Clean,
    /// A submit would send at least one changed field.
    Dirty,
}

/// One student as shown to the user: the fetched snapshot plus the values
/// currently in the inputs.
#[derive(Debug, Clone)]
pub struct Row {
    snapshot: StudentRecord,
    draft: StudentFields,
    state: RowState,
    last_error: Option<String>,
}

impl Row {
    fn new(snapshot: StudentRecord) -> Self {
        let draft = snapshot.fields();
        Self {
            snapshot,
            draft,
            state: RowState::Clean,
            last_error: None,
        }
    }

    pub fn id(&self) -> StudentId {
        self.snapshot.id
    }

    /// Values as last fetched from the server.
    pub fn snapshot(&self) -> &StudentRecord {
        &self.snapshot
    }

    /// Values currently in the inputs.
    pub fn draft(&self) -> &StudentFields {
        &self.draft
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    /// Message of the last failed submit on this row.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether submitting would send anything: trimmed draft vs snapshot.
    pub fn has_changes(&self) -> bool {
        self.draft.trimmed() != self.snapshot.fields()
    }
}

/// Result of [`SyncController::submit_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing differed from the snapshot; no request was sent.
    NoChanges,
    /// The server accepted the update; carries its message.
    Updated(String),
}

/// Result of [`SyncController::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The confirmation step declined; no request was sent.
    Cancelled,
    /// The server removed the student; carries its message.
    Deleted(String),
}

/// Keeps the full student list and drives create/update/delete against
/// the API, reloading everything after each successful mutation.
pub struct SyncController {
    client: StudentsClient,
    rows: Vec<Row>,
}

impl SyncController {
    pub fn new(client: StudentsClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: StudentId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    fn row_mut(&mut self, id: StudentId) -> ClientResult<&mut Row> {
        self.rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(ClientError::UnknownRow(id))
    }

    fn replace_rows(&mut self, records: Vec<StudentRecord>) {
        self.rows = records.into_iter().map(Row::new).collect();
    }

    /// Fetches the whole list and rebuilds every row as `Clean`.
    ///
    /// On failure the previous view is kept.
    pub async fn load(&mut self) -> ClientResult<()> {
        let records = self.client.list().await?;
        debug!("Loaded {} students", records.len());
        self.replace_rows(records);
        Ok(())
    }

    /// Sets one input of a row and returns the row's new state.
    ///
    /// The row is `Dirty` only if a submit would send something, so an
    /// edit that differs from the snapshot by surrounding whitespace alone
    /// leaves it `Clean`.
    pub fn edit(
        &mut self,
        id: StudentId,
        field: Field,
        value: impl Into<String>,
    ) -> ClientResult<RowState> {
        let row = self.row_mut(id)?;
        row.draft.set(field, value);
        row.state = if row.has_changes() {
            RowState::Dirty
        } else {
            RowState::Clean
        };
        Ok(row.state)
    }

    /// Sends the row's draft as an update, unless it matches the snapshot.
    ///
    /// Values are trimmed first. Empty fields are rejected locally. On a
    /// server or network failure the row stays `Dirty` with the error kept
    /// in [`Row::last_error`].
    pub async fn submit_update(&mut self, id: StudentId) -> ClientResult<UpdateOutcome> {
        let row = self.row_mut(id)?;
        if !row.has_changes() {
            row.state = RowState::Clean;
            info!("No changes detected for student {}", id);
            return Ok(UpdateOutcome::NoChanges);
        }

        let fields = row.draft.trimmed();
        let missing = fields.empty_fields();
        if !missing.is_empty() {
            let err = ValidationError::MissingFields(missing);
            row.last_error = Some(err.to_string());
            return Err(err.into());
        }

        match self.client.update(id, &fields).await {
            Ok(resp) => {
                self.load().await?;
                Ok(UpdateOutcome::Updated(resp.message))
            }
            Err(err) => {
                warn!("Error updating student {}: {}", id, err);
                if let Ok(row) = self.row_mut(id) {
                    row.state = RowState::Dirty;
                    row.last_error = Some(err.to_string());
                }
                Err(err)
            }
        }
    }

    /// Creates a student from trimmed `fields` and reloads the list.
    pub async fn create(&mut self, fields: StudentFields) -> ClientResult<CreatedResponse> {
        let fields = fields.trimmed();
        let missing = fields.empty_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing).into());
        }

        let created = self.client.create(&fields).await.inspect_err(|err| {
            warn!("Error adding student: {}", err);
        })?;
        self.load().await?;
        Ok(created)
    }

    /// Deletes a student after `confirm` approves the row.
    pub async fn delete<F>(&mut self, id: StudentId, confirm: F) -> ClientResult<DeleteOutcome>
    where
        F: FnOnce(&Row) -> bool,
    {
        let row = self.row_mut(id)?;
        if !confirm(row) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let resp = self.client.delete(id).await.inspect_err(|err| {
            warn!("Error deleting student {}: {}", id, err);
        })?;
        self.load().await?;
        Ok(DeleteOutcome::Deleted(resp.message))
    }
}
