//! Rotating joke quotes for the dashboard footer. Two decks; grinch mode
//! swaps to the sour one. Selection is driven by the caller's RNG so a
//! seeded generator makes rotation deterministic in tests.

use rand::Rng;

const FESTIVE_QUOTES: &[&str] = &[
    "Out-of-office replies don't write themselves. Actually, they do.",
    "Every status meeting skipped is a snowflake earned.",
    "The backlog will keep. The glühwein will not.",
    "Remember: nobody ever said 'I wish I'd refactored more in December.'",
    "Your calendar called. It's learning to say no.",
    "Eat, sleep, decline invite, repeat.",
    "The only standup that matters now is standing up from this desk.",
    "Ship it, wrap it, leave it under the tree.",
];

const GRINCH_QUOTES: &[&str] = &[
    "It's not the holidays, it's just a longer incident-free window.",
    "Joy is a non-functional requirement.",
    "The snow is just whitespace with better marketing.",
    "Somewhere, a pager is quietly judging you.",
    "Festive cheer detected. Escalating.",
    "Mistletoe is a dependency you didn't audit.",
    "Bah. Humbug. See ticket for details.",
];

#[derive(Debug, Clone)]
pub struct QuoteDeck {
    grinch: bool,
    index: usize,
}

impl QuoteDeck {
    pub fn new() -> Self {
        Self {
            grinch: false,
            index: 0,
        }
    }

    pub fn set_grinch(&mut self, grinch: bool) {
        if self.grinch != grinch {
            self.grinch = grinch;
            self.index = 0;
        }
    }

    pub fn is_grinch(&self) -> bool {
        self.grinch
    }

    pub fn current(&self) -> &'static str {
        let deck = self.deck();
        deck[self.index % deck.len()]
    }

    /// Pick a different quote at random. With a single-entry deck this is
    /// a no-op rather than a spin.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        let len = self.deck().len();
        if len < 2 {
            return;
        }
        let offset = rng.gen_range(1..len);
        self.index = (self.index + offset) % len;
    }

    fn deck(&self) -> &'static [&'static str] {
        if self.grinch { GRINCH_QUOTES } else { FESTIVE_QUOTES }
    }
}

impl Default for QuoteDeck {
    fn default() -> Self {
        Self::new()
    }
}
