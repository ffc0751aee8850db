//! # blindside-room: Room Coordination Layer
//!
//! Pairs two participants at a table, runs hands through
//! [`blindside_engine`], persists chip stacks across hands and projects an
//! asymmetric view of the game to each seat. Transport, room-code
//! generation and disconnect detection live outside this crate: actions
//! arrive already parsed and tagged with a stable participant id, and
//! state leaves as a [`view::StateView`] for the delivery layer to push.
//!
//! ## Core Modules
//!
//! - [`room`] - A single room: seats, the lazy engine context, per-room
//!   serialization of all mutation
//! - [`registry`] - Explicitly owned map of live rooms, injected by the host
//! - [`view`] - Per-viewer projections and match-winner summaries
//! - [`errors`] - Room and seating error types
//! - [`logging`] - tracing subscriber setup for embedding hosts
//!
//! ## Quick Start
//!
//! ```rust
//! use blindside_engine::player::PlayerAction;
//! use blindside_room::registry::RoomRegistry;
//!
//! let registry = RoomRegistry::new();
//! registry.create_room("ABCD").expect("create");
//! registry.join("ABCD", "p1", "Ann").expect("join");
//! registry.join("ABCD", "p2", "Ben").expect("join");
//!
//! registry.start_hand("ABCD").expect("deal");
//! registry.action("ABCD", "p1", PlayerAction::Check).expect("act");
//!
//! let view = registry.projection("ABCD", "p2").expect("project");
//! assert!(view.is_your_turn);
//! assert!(view.your_card.is_none(), "own card stays hidden mid-hand");
//! ```

pub mod errors;
pub mod logging;
pub mod registry;
pub mod room;
pub mod view;
