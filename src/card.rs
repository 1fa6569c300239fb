//! Card types.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Blackjack value of the rank with an ace counted high.
    #[must_use]
    pub const fn natural_value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns whether the rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

/// A playing card.
///
/// Rank and suit are the card's identity and never change. The blackjack
/// value is derived from the rank and two display flags: whether the card is
/// face-down (worth 0) and whether an ace has been demoted from 11 to 1.
/// Equality and hashing only consider the identity.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_down: bool,
    demoted: bool,
}

impl Card {
    /// Creates a face-up card with its natural value.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_down: false,
            demoted: false,
        }
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank.is_ace()
    }

    /// Returns whether the card is face-down.
    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        self.face_down
    }

    /// Returns whether this ace has been demoted to 1.
    #[must_use]
    pub const fn is_demoted(&self) -> bool {
        self.demoted
    }

    /// Returns whether the card is a face-up ace still counted as 11.
    #[must_use]
    pub const fn is_soft_ace(&self) -> bool {
        self.rank.is_ace() && !self.face_down && !self.demoted
    }

    /// Current blackjack value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        if self.face_down {
            0
        } else if self.rank.is_ace() && self.demoted {
            1
        } else {
            self.rank.natural_value()
        }
    }

    /// Toggles the face-down state.
    ///
    /// Either direction clears ace demotion, so a card turned face-up is
    /// always worth its natural value again.
    pub const fn flip(&mut self) {
        self.face_down = !self.face_down;
        self.demoted = false;
    }

    /// Demotes a face-up soft ace from 11 to 1.
    ///
    /// Returns `false` (and changes nothing) for any other card.
    pub const fn demote(&mut self) -> bool {
        if self.is_soft_ace() {
            self.demoted = true;
            true
        } else {
            false
        }
    }

    /// Restores the card to face-up with its natural value.
    pub const fn reset(&mut self) {
        self.face_down = false;
        self.demoted = false;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_down {
            f.write_str("Unknown")
        } else {
            write!(f, "{} of {}", self.rank.label(), self.suit.name())
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
