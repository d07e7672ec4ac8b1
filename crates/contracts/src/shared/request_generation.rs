use crate::domain::a001_person::aggregate::PersonId;

/// Tag handed out when a fetch starts and checked again when its response arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub person_id: PersonId,
}

/// Per-view request generation counter.
///
/// Every new fetch bumps the generation; a response may update the view only
/// while its ticket is still the latest one. There is no cancellation: late
/// responses simply fail [`RequestGenerations::is_current`] and are dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestGenerations {
    generation: u64,
    person_id: Option<PersonId>,
}

impl RequestGenerations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, person_id: PersonId) -> FetchTicket {
        self.generation += 1;
        self.person_id = Some(person_id);
        FetchTicket {
            generation: self.generation,
            person_id,
        }
    }

    /// Abandon whatever is in flight without starting a new fetch
    /// (e.g. the identifier in the URL became invalid).
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.person_id = None;
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.person_id == Some(ticket.person_id)
    }

    pub fn current_person(&self) -> Option<PersonId> {
        self.person_id
    }
}
