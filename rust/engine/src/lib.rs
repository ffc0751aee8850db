//! # blindside-engine: Hidden-Card Betting Engine Core
//!
//! The betting state machine for a two-seat hidden-card game: each
//! participant sees the opponent's card but never their own, and bets
//! blind on relative rank. Provides legal-action validation, pot
//! accumulation, all-in truncation, raise-count limiting and showdown
//! resolution, with reproducible RNG for replay and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Per-hand mutable state (pot, bets, acted-set, outcome)
//! - [`engine`] - Hand lifecycle: deal, antes, actions, showdown
//! - [`player`] - Player actions and stack constants
//! - [`rules`] - Betting legality and raise-escalation validation
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blindside_engine::engine::Engine;
//! use blindside_engine::player::PlayerAction;
//!
//! let mut engine = Engine::new(Some(7));
//! engine.start_hand().expect("deal");
//!
//! // Seat 0 raises by 3 on top of the 1-chip ante
//! engine.apply_action(0, PlayerAction::Raise(3)).expect("raise");
//! assert_eq!(engine.hand().current_bet, 4);
//!
//! // Seat 1 calls, which always triggers the showdown
//! engine.apply_action(1, PlayerAction::Call).expect("call");
//! assert!(engine.hand().hand_over);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use blindside_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card sequences
//! ```
//!
//! ## Action Validation
//!
//! Actions can be validated without applying them:
//!
//! ```rust
//! use blindside_engine::hand::Hand;
//! use blindside_engine::player::PlayerAction;
//! use blindside_engine::rules::validate_action;
//!
//! let hand = Hand {
//!     current_bet: 1,
//!     bets: [1, 1],
//!     ..Hand::default()
//! };
//!
//! match validate_action(&hand, 99, 0, PlayerAction::Check) {
//!     Ok(validated) => println!("Valid action: {:?}", validated),
//!     Err(e) => println!("Invalid action: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod player;
pub mod rules;
