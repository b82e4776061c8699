//! Keyword heuristics over the model's reply.
//!
//! Two independent trigger sets, kept as-is from the observed flow as a
//! migration safety net for the explicit stage machine:
//!
//! - the display-stage set spots a reply that *asks* for a location
//! - the execute set spots a reply that *announces* a search
//!
//! The sets diverge in wording on purpose; see DESIGN.md.

/// Trigger words that mark a reply as a location request.
pub const LOCATION_TRIGGERS: [&str; 5] = ["location", "city", "area", "zip code", "where are you"];

/// Trigger words that mark a reply as announcing a facility search.
pub const SEARCH_TRIGGERS: [&str; 2] = ["locating", "finding"];

/// Replies at or past this many characters never count as a location
/// request; long explanatory replies mention the trigger words too often.
pub const TRIGGER_REPLY_CEILING: usize = 300;

/// Returns true if the reply asks the user for their location.
#[must_use]
pub fn is_location_request(reply: &str) -> bool {
    if reply.chars().count() >= TRIGGER_REPLY_CEILING {
        return false;
    }
    let lowered = reply.to_lowercase();
    LOCATION_TRIGGERS
        .iter()
        .any(|trigger| lowered.contains(trigger))
}

/// Returns true if the reply announces a facility search.
#[must_use]
pub fn is_search_execution(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    SEARCH_TRIGGERS
        .iter()
        .any(|trigger| lowered.contains(trigger))
}

/// Signals extracted from one turn, fed to the stage transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnSignals {
    /// The reply asked the user for their location.
    pub location_requested: bool,
    /// The reply announced a facility search.
    pub search_announced: bool,
    /// A facility search ran and succeeded this turn.
    pub facilities_returned: bool,
}

impl TurnSignals {
    /// Extracts the keyword signals from a model reply.
    #[must_use]
    pub fn from_reply(reply: &str) -> Self {
        Self {
            location_requested: is_location_request(reply),
            search_announced: is_search_execution(reply),
            facilities_returned: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_city_request_triggers() {
        assert!(is_location_request("Please tell me your city or area"));
    }

    #[test]
    fn every_location_trigger_matches() {
        for trigger in LOCATION_TRIGGERS {
            let reply = format!("Reply mentioning {trigger} briefly.");
            assert!(is_location_request(&reply), "trigger '{trigger}' missed");
        }
    }

    #[test]
    fn long_reply_never_triggers() {
        let mut reply = "Fever management involves rest and fluids. ".repeat(9);
        reply.push_str("The location of the nearest pharmacy can help.");
        assert!(reply.chars().count() >= TRIGGER_REPLY_CEILING);
        assert!(!is_location_request(&reply));
    }

    #[test]
    fn ceiling_counts_characters_not_bytes() {
        // Devanagari text is three bytes per character; the ceiling must
        // follow what the user sees.
        let reply = format!("{} कृपया अपना शहर बताएं city", "आराम करें। ".repeat(20));
        assert!(reply.len() >= TRIGGER_REPLY_CEILING);
        assert!(reply.chars().count() < TRIGGER_REPLY_CEILING);
        assert!(is_location_request(&reply));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_location_request("Which CITY are you in?"));
        assert!(is_search_execution("Locating facilities near you."));
    }

    #[test]
    fn search_triggers_are_independent_of_length() {
        let mut reply = "Here is a thorough explanation. ".repeat(12);
        reply.push_str("I am finding facilities now.");
        assert!(reply.chars().count() >= TRIGGER_REPLY_CEILING);
        assert!(is_search_execution(&reply));
        assert!(!is_location_request(&reply));
    }

    #[test]
    fn plain_symptom_question_triggers_nothing() {
        let signals = TurnSignals::from_reply("How long have you had the fever?");
        assert_eq!(signals, TurnSignals::default());
    }

    #[test]
    fn signals_from_location_request() {
        let signals = TurnSignals::from_reply("Please tell me your city or area");
        assert!(signals.location_requested);
        assert!(!signals.search_announced);
        assert!(!signals.facilities_returned);
    }
}
