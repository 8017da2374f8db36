//! Default collision wiring for the game
//!
//! Builds the registry the board dispatches through. Only two registrations
//! are needed: player versus any ghost (keyed on the broad `GHOST`
//! descriptor, so every personality falls back to it) and player versus
//! anything edible (keyed on the `EDIBLE` capability, covering pellets,
//! power pellets and fruit). Both are symmetric — a ghost drifting into the
//! player behaves exactly like the player walking into the ghost.

use crate::entities::{Fruit, Ghost, Pellet, PelletKind, Player, EDIBLE, GHOST, PLAYER};
use collision_dispatch::{Collidable, CollisionRegistry};

/// Tunable interaction values, taken from the game configuration.
#[derive(Debug, Clone, Copy)]
pub struct InteractionRules {
    /// Points for eating a ghost while energized
    pub ghost_points: u32,

    /// Duration of power-pellet energy, in ticks
    pub energize_ticks: u32,
}

impl Default for InteractionRules {
    fn default() -> Self {
        Self {
            ghost_points: 200,
            energize_ticks: 20,
        }
    }
}

/// Build the registry with the game's default interactions.
#[must_use]
pub fn default_interactions(rules: InteractionRules) -> CollisionRegistry {
    let mut registry = CollisionRegistry::new();

    registry.register(&PLAYER, &GHOST, move |player: &dyn Collidable, ghost: &dyn Collidable| {
        player_versus_ghost(player, ghost, rules);
    });

    registry.register(&PLAYER, &EDIBLE, move |player: &dyn Collidable, edible: &dyn Collidable| {
        player_versus_edible(player, edible, rules);
    });

    registry
}

/// An energized player eats the ghost; otherwise the ghost takes a life.
fn player_versus_ghost(player: &dyn Collidable, ghost: &dyn Collidable, rules: InteractionRules) {
    let Some(player) = player.as_any().downcast_ref::<Player>() else {
        return;
    };
    let Some(ghost) = ghost.as_any().downcast_ref::<Ghost>() else {
        return;
    };
    if ghost.is_eaten() {
        return;
    }

    if player.is_energized() {
        ghost.mark_eaten();
        player.add_points(rules.ghost_points);
        log::info!(
            "Player ate a {:?} ghost (+{} points)",
            ghost.personality(),
            rules.ghost_points
        );
    } else {
        player.lose_life();
        log::info!(
            "A {:?} ghost caught the player ({} lives left)",
            ghost.personality(),
            player.lives()
        );
    }
}

/// The player eats whatever it overlapped: score it and consume it.
fn player_versus_edible(player: &dyn Collidable, edible: &dyn Collidable, rules: InteractionRules) {
    let Some(player) = player.as_any().downcast_ref::<Player>() else {
        return;
    };

    if let Some(pellet) = edible.as_any().downcast_ref::<Pellet>() {
        if pellet.is_consumed() {
            return;
        }
        pellet.consume();
        player.add_points(pellet.points());
        if pellet.kind() == PelletKind::Power {
            player.energize(rules.energize_ticks);
            log::info!("Player is energized for {} ticks", rules.energize_ticks);
        }
    } else if let Some(fruit) = edible.as_any().downcast_ref::<Fruit>() {
        if fruit.is_consumed() {
            return;
        }
        fruit.consume();
        player.add_points(fruit.points());
        log::info!("Player ate a fruit (+{} points)", fruit.points());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Personality;

    fn rules() -> InteractionRules {
        InteractionRules {
            ghost_points: 200,
            energize_ticks: 5,
        }
    }

    #[test]
    fn eating_a_pellet_scores_and_consumes() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let pellet = Pellet::new(PelletKind::Standard);

        registry.collide(&player, &pellet);

        assert_eq!(player.score(), 10);
        assert!(pellet.is_consumed());
    }

    #[test]
    fn a_consumed_pellet_scores_nothing() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let pellet = Pellet::new(PelletKind::Standard);

        registry.collide(&player, &pellet);
        registry.collide(&player, &pellet);

        assert_eq!(player.score(), 10);
    }

    #[test]
    fn power_pellet_energizes() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let pellet = Pellet::new(PelletKind::Power);

        registry.collide(&player, &pellet);

        assert_eq!(player.score(), 50);
        assert!(player.is_energized());
    }

    #[test]
    fn fruit_scores_its_value() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let fruit = Fruit::new(100);

        registry.collide(&player, &fruit);

        assert_eq!(player.score(), 100);
        assert!(fruit.is_consumed());
    }

    #[test]
    fn ghost_takes_a_life() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let ghost = Ghost::new(Personality::Chaser);

        registry.collide(&player, &ghost);

        assert_eq!(player.lives(), 2);
        assert!(!ghost.is_eaten());
    }

    #[test]
    fn ghost_moving_into_player_also_takes_a_life() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let ghost = Ghost::new(Personality::Ambusher);

        // The ghost is the collider; the inverse handler restores the
        // (player, ghost) argument order.
        registry.collide(&ghost, &player);

        assert_eq!(player.lives(), 2);
    }

    #[test]
    fn energized_player_eats_the_ghost() {
        let registry = default_interactions(rules());
        let player = Player::new(3);
        let ghost = Ghost::new(Personality::Chaser);
        player.energize(5);

        registry.collide(&player, &ghost);

        assert!(ghost.is_eaten());
        assert_eq!(player.score(), 200);
        assert_eq!(player.lives(), 3);
    }

    #[test]
    fn both_personalities_fall_back_to_the_ghost_handler() {
        let registry = default_interactions(rules());
        let player = Player::new(5);

        registry.collide(&player, &Ghost::new(Personality::Chaser));
        registry.collide(&player, &Ghost::new(Personality::Ambusher));

        assert_eq!(player.lives(), 3);
    }
}
