//! poker-hands: five-card poker hand ranking
//!
//! Classifies exactly five cards into one of the ten standard categories, orders hands by
//! strength with full tie-breaking, and renders a short description of each hand.
//! Anything other than five cards ranks as `NotRankable`, below every real hand.
//!
//! ## Quick start
//! ```
//! use poker_hands::cards::parse_cards;
//! use poker_hands::evaluator::{compare, evaluate, Category};
//! use std::cmp::Ordering;
//!
//! let boat = evaluate(&parse_cards("AS AH AD KC KS").unwrap());
//! let flush = evaluate(&parse_cards("2H 7H 9H JH AH").unwrap());
//! assert_eq!(boat.category(), Category::FullHouse);
//! assert_eq!(boat.describe(), "Full House, Aces over Kings");
//! assert_eq!(compare(&boat, &flush), Ordering::Greater);
//! ```
//!
//! ## TUI
//! Deal showdowns in the terminal with:
//! ```sh
//! cargo run --bin showdown
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
