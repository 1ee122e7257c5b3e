use contracts::domain::a001_packing::SearchHit;

/// What the input handler must do after a keystroke
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// Term too short: suggestions were cleared, no request
    Clear,
    /// Wait for the debounce interval, then look up `term` if `ticket` is
    /// still current
    Schedule { ticket: u64, term: String },
}

/// Autocomplete state with a generation-ticket debouncer.
///
/// Every keystroke and every selection bumps the generation, so a pending
/// lookup or a late response from an older generation is dropped.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<SearchHit>,
    min_chars: usize,
    generation: u64,
}

impl SearchState {
    pub fn new(min_chars: usize) -> Self {
        Self {
            term: String::new(),
            results: Vec::new(),
            min_chars,
            generation: 0,
        }
    }

    pub fn input(&mut self, term: String) -> SearchAction {
        self.generation += 1;
        self.term = term;
        let query = self.term.trim();
        if query.chars().count() < self.min_chars {
            self.results.clear();
            return SearchAction::Clear;
        }
        SearchAction::Schedule {
            ticket: self.generation,
            term: query.to_string(),
        }
    }

    /// Still the latest input once the debounce interval elapsed?
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }

    pub fn apply(&mut self, ticket: u64, hits: Vec<SearchHit>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Discarding stale search results #{}", ticket);
            return false;
        }
        self.results = hits;
        true
    }

    /// Pick a suggestion: fill the input, hide suggestions, cancel pending
    /// lookups. Returns the packing number whose detail must be fetched.
    pub fn select(&mut self, pack_nomor: &str) -> String {
        self.generation += 1;
        self.term = pack_nomor.to_string();
        self.results.clear();
        self.term.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str) -> SearchHit {
        SearchHit {
            pack_nomor: id.to_string(),
            pack_spk_nomor: String::new(),
        }
    }

    #[test]
    fn test_short_input_never_schedules() {
        let mut state = SearchState::new(3);
        state.results = vec![hit("PK-1")];
        assert_eq!(state.input("P".into()), SearchAction::Clear);
        assert_eq!(state.input("PK".into()), SearchAction::Clear);
        assert_eq!(state.input(" PK ".into()), SearchAction::Clear);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_burst_of_keystrokes_fires_once() {
        let mut state = SearchState::new(3);
        let tickets: Vec<u64> = ["PK-", "PK-0", "PK-00"]
            .iter()
            .filter_map(|t| match state.input(t.to_string()) {
                SearchAction::Schedule { ticket, .. } => Some(ticket),
                SearchAction::Clear => None,
            })
            .collect();
        assert_eq!(tickets.len(), 3);

        // each timer wakes up after the interval; only the last is still current
        let fired = tickets.iter().filter(|t| state.is_current(**t)).count();
        assert_eq!(fired, 1);
        assert!(state.is_current(*tickets.last().unwrap()));
    }

    #[test]
    fn test_schedule_carries_trimmed_term() {
        let mut state = SearchState::new(3);
        match state.input("  PK-1 ".into()) {
            SearchAction::Schedule { term, .. } => assert_eq!(term, "PK-1"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_late_results_are_dropped() {
        let mut state = SearchState::new(3);
        let first = match state.input("PK-1".into()) {
            SearchAction::Schedule { ticket, .. } => ticket,
            SearchAction::Clear => unreachable!(),
        };
        state.input("PK".into());
        assert!(!state.apply(first, vec![hit("PK-10")]));
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_select_fills_input_and_cancels_pending() {
        let mut state = SearchState::new(3);
        let ticket = match state.input("PK-1".into()) {
            SearchAction::Schedule { ticket, .. } => ticket,
            SearchAction::Clear => unreachable!(),
        };
        assert!(state.apply(ticket, vec![hit("PK-10"), hit("PK-11")]));

        let chosen = state.select("PK-11");
        assert_eq!(chosen, "PK-11");
        assert_eq!(state.term, "PK-11");
        assert!(state.results.is_empty());
        assert!(!state.is_current(ticket));
    }
}
