//! Participants and the store that owns them.

mod participant;
mod store;

pub use participant::{Order, Participant, ParticipantId};
pub use store::{OrderEdit, ParticipantStore, StoreError};
