//! Communication phrase cards
//!
//! A fixed set of cards a child can tap when speaking is hard. Selecting a
//! card hands its spoken text to the speech capability; the set itself is
//! static content, not user data.

/// One tappable phrase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseCard {
    /// Stable card id.
    pub id: &'static str,
    /// Short label shown on the card.
    pub label: &'static str,
    /// Full sentence handed to the speech capability.
    pub spoken: &'static str,
}

/// The built-in card set.
pub const CARDS: [PhraseCard; 8] = [
    PhraseCard {
        id: "c1",
        label: "I need a break",
        spoken: "I need a break.",
    },
    PhraseCard {
        id: "c2",
        label: "Too loud",
        spoken: "It's too loud.",
    },
    PhraseCard {
        id: "c3",
        label: "I don't understand",
        spoken: "I don't understand.",
    },
    PhraseCard {
        id: "c4",
        label: "Please repeat",
        spoken: "Can you repeat that?",
    },
    PhraseCard {
        id: "c5",
        label: "I want quiet",
        spoken: "I want quiet.",
    },
    PhraseCard {
        id: "c6",
        label: "Schedule?",
        spoken: "Can I see the schedule?",
    },
    PhraseCard {
        id: "c7",
        label: "Water, please",
        spoken: "Water, please.",
    },
    PhraseCard {
        id: "c8",
        label: "Thank you",
        spoken: "Thank you.",
    },
];

/// Looks up a card by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static PhraseCard> {
    CARDS.iter().find(|card| card.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_cards() {
        assert_eq!(CARDS.len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = CARDS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CARDS.len());
    }

    #[test]
    fn test_find_known() {
        let card = find("c1").unwrap();
        assert_eq!(card.spoken, "I need a break.");
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("c99").is_none());
    }

    #[test]
    fn test_spoken_text_is_a_sentence() {
        for card in &CARDS {
            assert!(
                card.spoken.ends_with('.') || card.spoken.ends_with('?'),
                "card {} spoken text should be a full sentence",
                card.id
            );
        }
    }
}
