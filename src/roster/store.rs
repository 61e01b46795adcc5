//! Ordered participant list with a names-only persisted cache.

use thiserror::Error;

use crate::cache::{decode_names, encode_names, CACHED_NAMES_SLOT};
use crate::storage::SlotStore;

use super::participant::{Order, Participant, ParticipantId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No participant with id {0}")]
    UnknownParticipant(ParticipantId),
}

/// Outcome of an order edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderEdit {
    /// Text parsed to a valid order and was stored.
    Applied(Order),
    /// Text was partial, not numeric or negative. The order is unchanged.
    Ignored,
}

/// Owns the participants and keeps the names cache in step with every
/// structural change.
///
/// Name edits and removals rewrite the cache; additions and order edits do
/// not. Orders are never persisted.
pub struct ParticipantStore {
    participants: Vec<Participant>,
    slots: Box<dyn SlotStore>,
}

impl ParticipantStore {
    /// Restore names from the cache, or start with one blank participant.
    pub fn load(slots: Box<dyn SlotStore>) -> Self {
        let names = slots
            .read(CACHED_NAMES_SLOT)
            .map_err(|err| err.to_string())
            .and_then(|bytes| match bytes {
                Some(bytes) => decode_names(&bytes).map_err(|err| err.to_string()),
                None => Ok(Vec::new()),
            });

        let participants: Vec<Participant> = match names {
            Ok(names) => names.into_iter().map(Participant::new).collect(),
            Err(err) => {
                tracing::warn!(store = slots.name(), "Names cache unreadable: {}", err);
                Vec::new()
            }
        };

        let participants = if participants.is_empty() {
            vec![Participant::blank()]
        } else {
            tracing::debug!(count = participants.len(), "Restored cached names");
            participants
        };

        Self {
            participants,
            slots,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Append a blank participant and return its id.
    pub fn add_participant(&mut self) -> ParticipantId {
        let participant = Participant::blank();
        let id = participant.id;
        self.participants.push(participant);
        id
    }

    pub fn update_name(&mut self, id: ParticipantId, name: &str) -> Result<(), StoreError> {
        let participant = self.find_mut(id)?;
        participant.name = name.to_string();
        self.persist_names();
        Ok(())
    }

    /// Apply raw order text. Anything that is not a finite, non-negative
    /// number leaves the current order in place.
    pub fn update_order(&mut self, id: ParticipantId, input: &str) -> Result<OrderEdit, StoreError> {
        let participant = self.find_mut(id)?;
        Ok(match Order::parse(input) {
            Some(order) => {
                participant.order = order;
                OrderEdit::Applied(order)
            }
            None => OrderEdit::Ignored,
        })
    }

    /// Remove a participant. Removing the last one is allowed.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant, StoreError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::UnknownParticipant(id))?;
        let removed = self.participants.remove(index);
        self.persist_names();
        Ok(removed)
    }

    /// Overwrite the names cache with the current names.
    ///
    /// Failures are logged and the previous cache value is kept.
    pub fn persist_names(&mut self) {
        let bytes = match encode_names(self.participants.iter().map(|p| p.name.as_str())) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!("Skipping names cache update: {}", err);
                return;
            }
        };
        if let Err(err) = self.slots.write(CACHED_NAMES_SLOT, &bytes) {
            tracing::warn!(store = self.slots.name(), "Names cache write failed: {}", err);
        }
    }

    fn find_mut(&mut self, id: ParticipantId) -> Result<&mut Participant, StoreError> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::UnknownParticipant(id))
    }
}
