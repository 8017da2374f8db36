//! Game entity taxonomy and entity structs
//!
//! The type descriptors here form the collision universe the registry
//! dispatches over. One Rust struct can cover several game types: `Ghost`
//! reports a per-personality descriptor and `Pellet` a per-kind descriptor,
//! so handlers can be registered against the broad type (`GHOST`, `PELLET`)
//! or a specific one (`AMBUSHER`, `POWER_PELLET`).
//!
//! Entity state that collision handlers mutate lives in `Cell`s, since
//! handlers receive shared references.

use collision_dispatch::{Collidable, TypeInfo};
use std::any::Any;
use std::cell::Cell;

/// Root of the entity taxonomy.
pub static ACTOR: TypeInfo = TypeInfo::new("Actor");

/// The player.
pub static PLAYER: TypeInfo = TypeInfo::new("Player").with_parent(&ACTOR);

/// Any ghost, regardless of personality.
pub static GHOST: TypeInfo = TypeInfo::new("Ghost").with_parent(&ACTOR);

/// Ghost that chases the player directly.
pub static CHASER: TypeInfo = TypeInfo::new("Chaser").with_parent(&GHOST);

/// Ghost that cuts off the player's path.
pub static AMBUSHER: TypeInfo = TypeInfo::new("Ambusher").with_parent(&GHOST);

/// Capability: anything the player can eat.
pub static EDIBLE: TypeInfo = TypeInfo::new("Edible");

/// Standard pellet.
pub static PELLET: TypeInfo = TypeInfo::new("Pellet")
    .with_parent(&ACTOR)
    .with_capabilities(&[&EDIBLE]);

/// Power pellet; energizes the player when eaten.
pub static POWER_PELLET: TypeInfo = TypeInfo::new("PowerPellet").with_parent(&PELLET);

/// Bonus fruit.
pub static FRUIT: TypeInfo = TypeInfo::new("Fruit")
    .with_parent(&ACTOR)
    .with_capabilities(&[&EDIBLE]);

/// The player entity
#[derive(Debug)]
pub struct Player {
    /// Accumulated score
    score: Cell<u32>,

    /// Remaining lives
    lives: Cell<u32>,

    /// Whether the player is still in play
    alive: Cell<bool>,

    /// Ticks of ghost-eating power remaining
    energized_ticks: Cell<u32>,
}

impl Player {
    /// Create a player with the given number of lives.
    #[must_use]
    pub fn new(lives: u32) -> Self {
        Self {
            score: Cell::new(0),
            lives: Cell::new(lives),
            alive: Cell::new(lives > 0),
            energized_ticks: Cell::new(0),
        }
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.get()
    }

    /// Add points to the score.
    pub fn add_points(&self, points: u32) {
        self.score.set(self.score.get() + points);
    }

    /// Remaining lives.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives.get()
    }

    /// Whether the player is still in play.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    /// Whether the player can currently eat ghosts.
    #[must_use]
    pub fn is_energized(&self) -> bool {
        self.energized_ticks.get() > 0
    }

    /// Grant ghost-eating power for `ticks` simulation ticks.
    pub fn energize(&self, ticks: u32) {
        self.energized_ticks.set(ticks);
    }

    /// Advance per-tick timers.
    pub fn tick(&self) {
        let remaining = self.energized_ticks.get();
        if remaining > 0 {
            self.energized_ticks.set(remaining - 1);
        }
    }

    /// Lose a life; the player leaves play when none remain.
    pub fn lose_life(&self) {
        let lives = self.lives.get().saturating_sub(1);
        self.lives.set(lives);
        if lives == 0 {
            self.alive.set(false);
        }
    }
}

impl Collidable for Player {
    fn type_info(&self) -> &'static TypeInfo {
        &PLAYER
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Ghost movement personalities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    /// Chases the player directly
    Chaser,

    /// Tries to cut off the player's path
    Ambusher,
}

impl Personality {
    /// The type descriptor for this personality.
    #[must_use]
    pub fn type_info(self) -> &'static TypeInfo {
        match self {
            Self::Chaser => &CHASER,
            Self::Ambusher => &AMBUSHER,
        }
    }
}

/// A ghost entity
#[derive(Debug)]
pub struct Ghost {
    /// Movement personality; also selects the collision type
    personality: Personality,

    /// Whether an energized player has eaten this ghost
    eaten: Cell<bool>,
}

impl Ghost {
    /// Create a ghost with the given personality.
    #[must_use]
    pub fn new(personality: Personality) -> Self {
        Self {
            personality,
            eaten: Cell::new(false),
        }
    }

    /// This ghost's personality.
    #[must_use]
    pub const fn personality(&self) -> Personality {
        self.personality
    }

    /// Whether this ghost has been eaten.
    #[must_use]
    pub fn is_eaten(&self) -> bool {
        self.eaten.get()
    }

    /// Mark this ghost as eaten.
    pub fn mark_eaten(&self) {
        self.eaten.set(true);
    }
}

impl Collidable for Ghost {
    fn type_info(&self) -> &'static TypeInfo {
        self.personality.type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Pellet kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PelletKind {
    /// Standard pellet
    Standard,

    /// Power pellet; energizes the player
    Power,
}

impl PelletKind {
    /// The type descriptor for this kind.
    #[must_use]
    pub fn type_info(self) -> &'static TypeInfo {
        match self {
            Self::Standard => &PELLET,
            Self::Power => &POWER_PELLET,
        }
    }

    /// Points awarded when eaten.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Standard => 10,
            Self::Power => 50,
        }
    }
}

/// A pellet entity
#[derive(Debug)]
pub struct Pellet {
    /// Kind; also selects the collision type
    kind: PelletKind,

    /// Whether the pellet has been eaten
    consumed: Cell<bool>,
}

impl Pellet {
    /// Create a pellet of the given kind.
    #[must_use]
    pub fn new(kind: PelletKind) -> Self {
        Self {
            kind,
            consumed: Cell::new(false),
        }
    }

    /// This pellet's kind.
    #[must_use]
    pub const fn kind(&self) -> PelletKind {
        self.kind
    }

    /// Points awarded when eaten.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.kind.points()
    }

    /// Whether the pellet has been eaten.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Mark the pellet as eaten.
    pub fn consume(&self) {
        self.consumed.set(true);
    }
}

impl Collidable for Pellet {
    fn type_info(&self) -> &'static TypeInfo {
        self.kind.type_info()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A bonus fruit entity
#[derive(Debug)]
pub struct Fruit {
    /// Points awarded when eaten
    points: u32,

    /// Whether the fruit has been eaten
    consumed: Cell<bool>,
}

impl Fruit {
    /// Create a fruit worth the given points.
    #[must_use]
    pub fn new(points: u32) -> Self {
        Self {
            points,
            consumed: Cell::new(false),
        }
    }

    /// Points awarded when eaten.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Whether the fruit has been eaten.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Mark the fruit as eaten.
    pub fn consume(&self) {
        self.consumed.set(true);
    }
}

impl Collidable for Fruit {
    fn type_info(&self) -> &'static TypeInfo {
        &FRUIT
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
