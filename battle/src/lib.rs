//! Battle types, game data and decision engine for Generation 3 Pokemon.
//!
//! # Overview
//!
//! `hoenn-battle` sits between `hoenn-codec` (raw memory and save layouts) and
//! whatever drives the game:
//!
//! ```text
//! hoenn-codec (bytes -> records, battle structs)
//!        │
//!        ▼
//! hoenn-battle (domain types + engine) ← THIS CRATE
//!        │
//!        └─> caller (presses the buttons)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Pokemon types with the Generation 3 effectiveness chart
//! - [`Status`] - Non-volatile status conditions (Burn, Freeze, etc.)
//! - [`Volatile`] - Volatile conditions as stored in battle memory
//! - [`StatStages`] - Stat stage modifiers (-6 to +6)
//! - [`Weather`] - Rain, sun, sandstorm, hail
//! - [`Battler`] - One Pokemon as the engine sees it
//! - [`SideState`] - One side of the battle
//!
//! ## Game Data
//! - [`GameData`] - Move and species tables, injected into the engine
//! - [`Ability`], [`MoveData`], [`MoveFlags`]
//!
//! ## Engine
//! - [`Engine`] - Scores legal actions and picks the best one
//! - [`Strategy`] - Aggressive, Safe, Speedrun, Grind, Catch
//! - [`Decision`] - The chosen [`Action`] with every candidate's score
//!
//! # Example Usage
//!
//! ```ignore
//! use hoenn_battle::{BattleState, Engine, GameData, Strategy, TurnContext};
//!
//! let data = GameData::gen3();
//! let engine = Engine::new(&data);
//!
//! let state = BattleState::from_snapshot(&snapshot, &party, &data, TurnContext::default())?;
//! let decision = engine.decide(&state, Strategy::Aggressive)?;
//! println!("{} ({:?})", decision.action, decision.phase);
//! ```

pub mod data;
pub mod engine;
pub mod query;
pub mod types;

pub use data::{Ability, GameData, MoveData, MoveFlags, SpeciesData};
pub use engine::{
    Action, BattleState, DamageEstimate, Decision, Engine, EngineError, Phase, ScoredAction, Side,
    Strategy, Tuning, TurnContext,
};
pub use types::{
    Battler, MoveSlot, SideState, Stat, StatStages, Status, Type, Volatile, Weather, TYPE_CHART,
};
