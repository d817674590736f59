//! The runner: position, vertical motion and posture state machine
//!
//! Posture and bounding box are coupled: the box size only changes inside
//! [`Player::set_posture`], so a reader never sees a new posture with the
//! previous posture's box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::state::Viewport;
use crate::tuning::{BoxProfile, Tuning};

/// Player movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Posture {
    #[default]
    Running,
    Jumping,
    Ducking,
    /// Terminal; absorbs all input
    Dead,
}

/// Box sizes for the standing and ducking profiles, in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfiles {
    pub standing: Vec2,
    pub ducking: Vec2,
}

impl PlayerProfiles {
    pub fn new(tuning: &Tuning, viewport: Viewport) -> Self {
        let size = |p: BoxProfile| {
            Vec2::new(p.width_frac * viewport.width, p.height_frac * viewport.height)
        };
        Self {
            standing: size(tuning.standing),
            ducking: size(tuning.ducking),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Bottom-center (feet)
    pos: Vec2,
    /// Positive = falling
    vel_y: f32,
    posture: Posture,
    /// Current box size, always the profile of `posture`
    size: Vec2,
    profiles: PlayerProfiles,
    ground_y: f32,
}

impl Player {
    /// Fresh runner standing on the ground
    pub fn new(tuning: &Tuning, viewport: Viewport) -> Self {
        let profiles = PlayerProfiles::new(tuning, viewport);
        Self {
            pos: Vec2::new(tuning.player_x_frac * viewport.width, viewport.height),
            vel_y: 0.0,
            posture: Posture::Running,
            size: profiles.standing,
            profiles,
            ground_y: viewport.height,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn vel_y(&self) -> f32 {
        self.vel_y
    }

    #[inline]
    pub fn posture(&self) -> Posture {
        self.posture
    }

    /// Current box size, always the active posture's profile
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.posture == Posture::Dead
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.pos.y >= self.ground_y
    }

    /// Current collision box
    pub fn bounds(&self) -> Aabb {
        Aabb::from_bottom_center(self.pos, self.size)
    }

    /// Box size a posture uses
    pub fn profile_for(&self, posture: Posture) -> Vec2 {
        match posture {
            Posture::Ducking => self.profiles.ducking,
            Posture::Running | Posture::Jumping => self.profiles.standing,
            // Dead keeps whatever box it died with
            Posture::Dead => self.size,
        }
    }

    fn set_posture(&mut self, posture: Posture) {
        self.size = self.profile_for(posture);
        self.posture = posture;
    }

    /// Advance one tick with the sampled input
    pub fn update(&mut self, jump: bool, duck: bool, tuning: &Tuning, dt: f32) {
        if self.is_dead() {
            return;
        }

        // Gravity
        if !self.on_ground() || self.vel_y < 0.0 {
            self.vel_y += tuning.gravity * dt;
            self.pos.y += self.vel_y * dt;
            if self.pos.y >= self.ground_y {
                self.pos.y = self.ground_y;
                self.vel_y = 0.0;
                if self.posture == Posture::Jumping {
                    self.set_posture(Posture::Running);
                }
            }
        }

        // Ducking suppresses jump
        if jump && self.on_ground() && self.posture == Posture::Running {
            self.vel_y = tuning.jump_impulse;
            self.set_posture(Posture::Jumping);
        }

        if duck && self.on_ground() && self.posture == Posture::Running {
            self.set_posture(Posture::Ducking);
        } else if !duck && self.posture == Posture::Ducking {
            self.set_posture(Posture::Running);
        }
    }

    /// Collision: freeze in place for the rest of the run
    pub fn kill(&mut self) {
        self.vel_y = 0.0;
        self.set_posture(Posture::Dead);
    }

    /// Re-derive ground, x and profiles for a new viewport, keeping height above ground
    pub fn resize(&mut self, tuning: &Tuning, viewport: Viewport) {
        if self.is_dead() {
            return;
        }
        let height_above_ground = (self.ground_y - self.pos.y).max(0.0);
        self.profiles = PlayerProfiles::new(tuning, viewport);
        self.ground_y = viewport.height;
        self.pos = Vec2::new(
            tuning.player_x_frac * viewport.width,
            (viewport.height - height_above_ground).min(viewport.height),
        );
        self.set_posture(self.posture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn player() -> (Player, Tuning) {
        let tuning = Tuning::default();
        let player = Player::new(&tuning, Viewport::new(WORLD_WIDTH, WORLD_HEIGHT));
        (player, tuning)
    }

    #[test]
    fn test_starts_running_on_ground() {
        let (player, _) = player();
        assert_eq!(player.posture(), Posture::Running);
        assert!(player.on_ground());
        assert_eq!(player.pos().x, 0.1 * WORLD_WIDTH);
        assert_eq!(player.bounds().max.y, WORLD_HEIGHT);
    }

    #[test]
    fn test_jump_and_land() {
        let (mut player, tuning) = player();
        player.update(true, false, &tuning, SIM_DT);
        assert_eq!(player.vel_y(), JUMP_IMPULSE);
        assert_eq!(player.posture(), Posture::Jumping);

        let mut peak = WORLD_HEIGHT;
        let mut landed_after = None;
        for i in 1..200 {
            player.update(false, false, &tuning, SIM_DT);
            peak = peak.min(player.pos().y);
            if player.on_ground() {
                landed_after = Some(i);
                break;
            }
        }
        assert!(landed_after.is_some());
        assert_eq!(player.posture(), Posture::Running);
        assert_eq!(player.vel_y(), 0.0);
        // v²/2g = 101.25 units of lift
        assert!(WORLD_HEIGHT - peak > 90.0);
    }

    #[test]
    fn test_no_jump_in_air() {
        let (mut player, tuning) = player();
        player.update(true, false, &tuning, SIM_DT);
        player.update(false, false, &tuning, SIM_DT);
        let vel = player.vel_y();
        player.update(true, false, &tuning, SIM_DT);
        assert!(player.vel_y() > vel);
    }

    #[test]
    fn test_duck_swaps_box_atomically() {
        let (mut player, tuning) = player();
        let standing = player.bounds();

        player.update(false, true, &tuning, SIM_DT);
        assert_eq!(player.posture(), Posture::Ducking);
        let ducking = player.bounds();
        assert!(ducking.height() < standing.height());
        assert!(ducking.width() > standing.width());
        assert_eq!(player.size(), player.profile_for(Posture::Ducking));

        player.update(false, false, &tuning, SIM_DT);
        assert_eq!(player.posture(), Posture::Running);
        assert_eq!(player.bounds(), standing);
    }

    #[test]
    fn test_ducking_suppresses_jump() {
        let (mut player, tuning) = player();
        player.update(false, true, &tuning, SIM_DT);
        player.update(true, true, &tuning, SIM_DT);
        assert_eq!(player.posture(), Posture::Ducking);
        assert!(player.on_ground());
        assert_eq!(player.vel_y(), 0.0);
    }

    #[test]
    fn test_jump_wins_over_duck_when_running() {
        let (mut player, tuning) = player();
        player.update(true, true, &tuning, SIM_DT);
        assert_eq!(player.posture(), Posture::Jumping);
        assert_eq!(player.size(), player.profile_for(Posture::Running));
        // Box stays anchored at the feet
        let bounds = player.bounds();
        assert!((bounds.max.y - player.pos().y).abs() < 1e-3);
        assert!((bounds.width() - player.size().x).abs() < 1e-3);
    }

    #[test]
    fn test_cannot_duck_mid_air() {
        let (mut player, tuning) = player();
        player.update(true, false, &tuning, SIM_DT);
        player.update(false, true, &tuning, SIM_DT);
        assert_eq!(player.posture(), Posture::Jumping);
    }

    #[test]
    fn test_dead_is_frozen() {
        let (mut player, tuning) = player();
        player.update(true, false, &tuning, SIM_DT);
        player.update(false, false, &tuning, SIM_DT);
        player.kill();
        let frozen = player.clone();
        for _ in 0..30 {
            player.update(true, true, &tuning, SIM_DT);
        }
        assert_eq!(player, frozen);
        assert_eq!(player.posture(), Posture::Dead);
    }

    #[test]
    fn test_dead_keeps_ducking_box() {
        let (mut player, tuning) = player();
        player.update(false, true, &tuning, SIM_DT);
        let ducking = player.bounds();
        player.kill();
        assert_eq!(player.bounds(), ducking);
    }

    #[test]
    fn test_resize_rescales_profiles() {
        let (mut player, tuning) = player();
        player.resize(&tuning, Viewport::new(WORLD_WIDTH * 2.0, WORLD_HEIGHT * 2.0));
        assert_eq!(player.ground_y(), WORLD_HEIGHT * 2.0);
        assert!(player.on_ground());
        assert!((player.bounds().height() - 0.3 * WORLD_HEIGHT * 2.0).abs() < 1e-3);
    }
}
