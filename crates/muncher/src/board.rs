//! Grid world and simulation loop
//!
//! Minimal board: entities occupy cells on a `width x height` grid, movers
//! take one random step per tick, and every time a mover lands on an
//! occupied cell the collision is handed to the registry with the mover as
//! the collider. The board itself knows nothing about what a collision
//! does; that is entirely the registry's wiring.

use crate::config::GameplayConfig;
use crate::entities::{Fruit, Ghost, Pellet, PelletKind, Personality, Player};
use collision_dispatch::CollisionRegistry;
use rand::Rng;
use std::collections::HashSet;

/// A cell position on the board.
pub type Pos = (i32, i32);

/// The game board and every entity on it.
pub struct Board {
    width: i32,
    height: i32,
    player: Player,
    player_pos: Pos,
    player_spawn: Pos,
    ghosts: Vec<(Ghost, Pos)>,
    pellets: Vec<(Pellet, Pos)>,
    fruit: Option<(Fruit, Pos)>,
}

impl Board {
    /// Lay out a board from the gameplay configuration.
    ///
    /// The player starts at the center, ghosts in the corners with
    /// alternating personalities, pellets on random free cells with every
    /// n-th upgraded to a power pellet, and one fruit on a random cell.
    pub fn new<R: Rng>(config: &GameplayConfig, rng: &mut R) -> Self {
        let width = config.board_width.max(1);
        let height = config.board_height.max(1);
        let player_spawn = (width / 2, height / 2);

        let corners = [
            (0, 0),
            (width - 1, 0),
            (0, height - 1),
            (width - 1, height - 1),
        ];
        let ghosts = (0..config.ghost_count as usize)
            .map(|i| {
                let personality = if i % 2 == 0 {
                    Personality::Chaser
                } else {
                    Personality::Ambusher
                };
                (Ghost::new(personality), corners[i % corners.len()])
            })
            .collect();

        let mut taken = HashSet::new();
        taken.insert(player_spawn);
        let mut pellets = Vec::new();
        let mut attempts = 0;
        while (pellets.len() as u32) < config.pellet_count {
            attempts += 1;
            if attempts > 10_000 {
                log::warn!(
                    "Board too small for {} pellets; placed {}",
                    config.pellet_count,
                    pellets.len()
                );
                break;
            }
            let pos = (rng.gen_range(0..width), rng.gen_range(0..height));
            if !taken.insert(pos) {
                continue;
            }
            let kind = if config.power_pellet_every > 0
                && (pellets.len() as u32) % config.power_pellet_every == 0
            {
                PelletKind::Power
            } else {
                PelletKind::Standard
            };
            pellets.push((Pellet::new(kind), pos));
        }

        let fruit_pos = (rng.gen_range(0..width), rng.gen_range(0..height));
        let fruit = (config.fruit_points > 0).then(|| (Fruit::new(config.fruit_points), fruit_pos));

        Self {
            width,
            height,
            player: Player::new(config.lives),
            player_pos: player_spawn,
            player_spawn,
            ghosts,
            pellets,
            fruit,
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// Movement first, then collision dispatch for every co-located pair,
    /// then removal of consumed/eaten entities.
    pub fn tick<R: Rng>(&mut self, registry: &CollisionRegistry, rng: &mut R) {
        self.player.tick();

        // Player moves and collides with whatever occupies the new cell.
        self.player_pos = self.random_step(self.player_pos, rng);
        let lives_before = self.player.lives();
        for (ghost, pos) in &self.ghosts {
            if *pos == self.player_pos {
                registry.collide(&self.player, ghost);
            }
        }
        for (pellet, pos) in &self.pellets {
            if *pos == self.player_pos {
                registry.collide(&self.player, pellet);
            }
        }
        if let Some((fruit, pos)) = &self.fruit {
            if *pos == self.player_pos {
                registry.collide(&self.player, fruit);
            }
        }

        // Ghosts move; here the ghost is the collider.
        let mut steps = Vec::with_capacity(self.ghosts.len());
        for (_, pos) in &self.ghosts {
            steps.push(self.random_step(*pos, rng));
        }
        for ((ghost, pos), step) in self.ghosts.iter_mut().zip(steps) {
            *pos = step;
            if *pos == self.player_pos {
                registry.collide(&*ghost, &self.player);
            }
        }

        if self.player.lives() < lives_before && self.player.is_alive() {
            log::debug!("Player respawns at {:?}", self.player_spawn);
            self.player_pos = self.player_spawn;
        }

        self.pellets.retain(|(pellet, _)| !pellet.is_consumed());
        self.ghosts.retain(|(ghost, _)| !ghost.is_eaten());
        if self
            .fruit
            .as_ref()
            .is_some_and(|(fruit, _)| fruit.is_consumed())
        {
            self.fruit = None;
        }
    }

    /// Whether the game has ended (player out of lives or board cleared).
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.player.is_alive() || self.pellets.is_empty()
    }

    /// The player entity.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Pellets still on the board.
    #[must_use]
    pub fn pellets_remaining(&self) -> usize {
        self.pellets.len()
    }

    /// Ghosts still on the board.
    #[must_use]
    pub fn ghosts_remaining(&self) -> usize {
        self.ghosts.len()
    }

    /// One random orthogonal step, clamped to the board.
    fn random_step<R: Rng>(&self, (x, y): Pos, rng: &mut R) -> Pos {
        let (dx, dy) = match rng.gen_range(0..4_u8) {
            0 => (1, 0),
            1 => (-1, 0),
            2 => (0, 1),
            _ => (0, -1),
        };
        (
            (x + dx).clamp(0, self.width - 1),
            (y + dy).clamp(0, self.height - 1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::{default_interactions, InteractionRules};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_cell_config() -> GameplayConfig {
        // On a 1x1 board every step lands on the same cell, so collisions
        // are guaranteed each tick.
        GameplayConfig {
            board_width: 1,
            board_height: 1,
            pellet_count: 0,
            power_pellet_every: 0,
            ghost_count: 0,
            lives: 3,
            energize_ticks: 5,
            ghost_points: 200,
            fruit_points: 0,
            max_ticks: 10,
        }
    }

    #[test]
    fn player_eats_a_co_located_pellet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(&one_cell_config(), &mut rng);
        board.pellets.push((Pellet::new(PelletKind::Standard), (0, 0)));
        let registry = default_interactions(InteractionRules::default());

        board.tick(&registry, &mut rng);

        assert_eq!(board.player().score(), 10);
        assert_eq!(board.pellets_remaining(), 0);
        assert!(board.is_over());
    }

    #[test]
    fn ghost_collision_costs_a_life() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(&one_cell_config(), &mut rng);
        board.ghosts.push((Ghost::new(Personality::Chaser), (0, 0)));
        let registry = default_interactions(InteractionRules::default());

        board.tick(&registry, &mut rng);

        assert!(board.player().lives() < 3);
    }

    #[test]
    fn board_lays_out_from_config() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GameplayConfig {
            board_width: 8,
            board_height: 8,
            pellet_count: 12,
            power_pellet_every: 4,
            ghost_count: 3,
            fruit_points: 100,
            ..one_cell_config()
        };
        let board = Board::new(&config, &mut rng);

        assert_eq!(board.pellets_remaining(), 12);
        assert_eq!(board.ghosts_remaining(), 3);
        assert!(board.fruit.is_some());
        assert!(!board.is_over());
    }
}
