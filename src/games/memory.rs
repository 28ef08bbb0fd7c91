use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

pub static SYMBOLS: [&str; 8] = ["🔬", "⚛️", "🧪", "🧬", "🔭", "⚡", "🌡️", "🧲"];

/// Cards are laid out in a square grid of this many columns.
pub const GRID_SIDE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    pub position: usize,
    pub symbol: &'static str,
    pub face_up: bool,
    pub matched: bool,
}

/// Two face-up cards waiting to be compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPair {
    first: usize,
    second: usize,
    resolves_at: Instant,
}

/// Find all pairs among 16 face-down cards.
pub struct MemoryGame {
    id: Uuid,
    cards: Vec<MemoryCard>,
    first_flipped: Option<usize>,
    pending: Option<PendingPair>,
    moves: u32,
    matches: u32,
    completed: bool,
    reveal_delay: Duration,
    cursor: usize,
}

impl MemoryGame {
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            cards: Vec::new(),
            first_flipped: None,
            pending: None,
            moves: 0,
            matches: 0,
            completed: false,
            reveal_delay,
            cursor: 0,
        }
    }

    /// Deal a freshly shuffled board and reset the counters.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut symbols: Vec<&'static str> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        symbols.shuffle(rng);

        self.cards = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| MemoryCard {
                position,
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();
        self.first_flipped = None;
        self.pending = None;
        self.moves = 0;
        self.matches = 0;
        self.completed = false;
        self.cursor = 0;
        debug!(session = %self.id, "new memory board");
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True while two cards are face up waiting to be resolved.
    pub fn is_resolving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor by whole cells, clamped to the grid.
    pub fn move_cursor(&mut self, columns: isize, rows: isize) {
        if self.cards.is_empty() {
            return;
        }
        let side = GRID_SIDE as isize;
        let row_count = (self.cards.len() / GRID_SIDE) as isize;
        let column = (self.cursor as isize % side + columns).clamp(0, side - 1);
        let row = (self.cursor as isize / side + rows).clamp(0, row_count - 1);
        self.cursor = (row * side + column) as usize;
    }

    pub fn flip_at_cursor(&mut self, now: Instant) -> bool {
        self.flip(self.cursor, now)
    }

    /// Turn a card face up. Returns whether the card was flipped.
    ///
    /// Ignored while a pair is waiting to be resolved, and for cards that are
    /// already face up or matched.
    pub fn flip(&mut self, position: usize, now: Instant) -> bool {
        self.tick(now);
        if self.pending.is_some() {
            return false;
        }

        let Some(card) = self.cards.get_mut(position) else {
            return false;
        };
        if card.face_up || card.matched {
            return false;
        }
        card.face_up = true;

        match self.first_flipped.take() {
            None => self.first_flipped = Some(position),
            Some(first) => {
                self.pending = Some(PendingPair {
                    first,
                    second: position,
                    resolves_at: now + self.reveal_delay,
                });
            }
        }
        true
    }

    /// Resolve the pending pair once its reveal delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(pair) = self.pending else {
            return;
        };
        if now < pair.resolves_at {
            return;
        }

        self.pending = None;
        self.moves += 1;

        let is_match = self.cards[pair.first].symbol == self.cards[pair.second].symbol;
        for position in [pair.first, pair.second] {
            let card = &mut self.cards[position];
            if is_match {
                card.matched = true;
            } else {
                card.face_up = false;
            }
        }

        if is_match {
            self.matches += 1;
            if self.matches as usize == SYMBOLS.len() {
                self.completed = true;
                info!(session = %self.id, moves = self.moves, "memory board cleared");
            }
        }
        debug!(
            session = %self.id,
            is_match,
            moves = self.moves,
            matches = self.matches,
            "pair resolved"
        );
    }
}
