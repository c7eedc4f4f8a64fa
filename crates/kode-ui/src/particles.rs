//! Hero background: a field of glass shards pushed away from the pointer.
//!
//! Shards are scattered through a hollow sphere around the origin. The
//! whole group spins slowly and sits one unit behind the text plane. Each
//! frame the pointer position (smoothed) is projected to a repulsion point;
//! shards inside [`MAX_DIST`] of it are eased toward a displaced target and
//! spin faster, the rest ease back home.
//!
//! Placement is seeded, so a given seed always yields the same field.

use std::f32::consts::PI;
use std::ops::{Add, Mul, Sub};

pub const SHARD_COUNT: usize = 140;
/// Radius of the populated shell beyond the hollow core.
pub const SHELL_RADIUS: f32 = 2.5;
/// Radius of the empty core kept clear for the hero text.
pub const CORE_RADIUS: f32 = 1.5;
/// Repulsion reaches no further than this.
pub const MAX_DIST: f32 = 4.0;
const MAX_FORCE: f32 = 2.0;
/// Fraction of the remaining distance a shard covers per frame.
const POSITION_LERP: f32 = 0.05;
/// Fraction of the remaining distance the smoothed pointer covers per frame.
const POINTER_LERP: f32 = 0.1;
/// Normalized pointer to world units.
const POINTER_REACH: f32 = 6.0;
/// Group spin in radians per second.
const GROUP_SPIN_Y: f32 = 0.05;
const GROUP_SPIN_Z: f32 = 0.02;
const GROUP_DEPTH: f32 = -1.0;
const SPIN_MIN: f32 = 0.002;
const SPIN_RANGE: f32 = 0.005;
/// Extra spin per unit of force.
const FORCE_SPIN: f32 = 0.01;

const HASH_MULT: u32 = 2_654_435_761;

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    pub fn dot(self, o: Vec3) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { Vec3::default() }
    }

    pub fn lerp(self, target: Vec3, t: f32) -> Vec3 {
        self + (target - self) * t
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, o: Vec3) -> Vec3 {
        Vec3::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, k: f32) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }
}

// ---------------------------------------------------------------------------
// Seeded placement
// ---------------------------------------------------------------------------

/// Deterministic hash stream, one `u32` step per draw.
struct Seeded {
    seed: u32,
    counter: u32,
}

impl Seeded {
    fn new(seed: u32) -> Self {
        Self { seed, counter: 0 }
    }

    fn hash_step(seed: u32) -> u32 {
        let mut h = seed.wrapping_mul(HASH_MULT);
        h ^= h >> 16;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h
    }

    /// Next float in `[0.0, 1.0)`.
    fn next_f32(&mut self) -> f32 {
        let h = Self::hash_step(self.seed ^ self.counter.wrapping_mul(HASH_MULT));
        self.counter = self.counter.wrapping_add(1);
        (h >> 8) as f32 / 16_777_216.0
    }
}

/// Repulsion strength at distance `dist` from the repulsion point.
pub fn repulsion_force(dist: f32) -> f32 {
    if dist < MAX_DIST {
        (1.0 - dist / MAX_DIST).powi(2) * MAX_FORCE
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Shards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Shard {
    /// Rest position in group space.
    pub origin: Vec3,
    /// Current position in group space.
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    /// Idle spin per frame.
    pub spin: f32,
}

impl Shard {
    fn scatter(rng: &mut Seeded) -> Self {
        let theta = rng.next_f32() * PI * 2.0;
        let phi = (2.0 * rng.next_f32() - 1.0).acos();
        let r = rng.next_f32().cbrt() * SHELL_RADIUS + CORE_RADIUS;
        let origin = Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        );
        let rotation = Vec3::new(
            rng.next_f32() * PI,
            rng.next_f32() * PI,
            rng.next_f32() * PI,
        );
        Self {
            origin,
            position: origin,
            rotation,
            spin: SPIN_MIN + rng.next_f32() * SPIN_RANGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShardField {
    shards: Vec<Shard>,
    pointer: (f32, f32),
    target_pointer: (f32, f32),
    elapsed_ms: u64,
}

impl ShardField {
    /// Scatter [`SHARD_COUNT`] shards from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = Seeded::new(seed);
        let shards = (0..SHARD_COUNT).map(|_| Shard::scatter(&mut rng)).collect();
        Self {
            shards,
            pointer: (0.0, 0.0),
            target_pointer: (0.0, 0.0),
            elapsed_ms: 0,
        }
    }

    /// Record a pointer move in pixels over a `width` x `height` viewport.
    /// Zero-sized viewports are ignored.
    pub fn set_pointer(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.target_pointer = (x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0);
    }

    /// Advance one frame that lasted `dt_ms`.
    ///
    /// The lerps are per frame, so the host should call this once per
    /// rendered frame.
    pub fn tick(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(dt_ms));
        self.pointer.0 += (self.target_pointer.0 - self.pointer.0) * POINTER_LERP;
        self.pointer.1 += (self.target_pointer.1 - self.pointer.1) * POINTER_LERP;

        let repulsion = self.repulsion_point();
        let (rot_y, rot_z) = self.group_rotation();
        for shard in &mut self.shards {
            let world = to_world(shard.origin, rot_y, rot_z);
            let force = repulsion_force(world.distance(repulsion));
            let direction = (world - repulsion).normalize();
            let target = shard.origin + direction * force;
            shard.position = shard.position.lerp(target, POSITION_LERP);
            shard.rotation.x += shard.spin + force * FORCE_SPIN;
            shard.rotation.y += shard.spin + force * FORCE_SPIN;
        }
    }

    /// Where the smoothed pointer pushes from, in world space.
    pub fn repulsion_point(&self) -> Vec3 {
        Vec3::new(
            self.pointer.0 * POINTER_REACH,
            self.pointer.1 * POINTER_REACH,
            0.0,
        )
    }

    /// Group rotation `(y, z)` in radians.
    pub fn group_rotation(&self) -> (f32, f32) {
        let secs = self.elapsed_ms as f32 / 1000.0;
        (secs * GROUP_SPIN_Y, secs * GROUP_SPIN_Z)
    }

    /// Smoothed pointer in normalized device coordinates.
    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn shards(&self) -> &[Shard] {
        &self.shards
    }
}

/// Group space to world space: spin about Z, then Y, then push back.
fn to_world(p: Vec3, rot_y: f32, rot_z: f32) -> Vec3 {
    let (sz, cz) = rot_z.sin_cos();
    let x = p.x * cz - p.y * sz;
    let y = p.x * sz + p.y * cz;
    let (sy, cy) = rot_y.sin_cos();
    Vec3::new(x * cy + p.z * sy, y, -x * sy + p.z * cy + GROUP_DEPTH)
}
