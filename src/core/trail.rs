use super::constants::{
    MIN_LIFETIME, TRAIL_FADE_FLOOR, TRAIL_MAX_SEGMENTS, TRAIL_MIN_SEGMENTS, TRAIL_MOVES,
    TRAIL_NEIGHBOR_PROBABILITY, TRAIL_SPEED_SLOWDOWN,
};
use super::grid::{lerp_cells, GridCell};
use rand::prelude::*;
use smallvec::SmallVec;

/// Random walk of a single trail, at most `TRAIL_MAX_SEGMENTS` waypoints.
pub type TrailPath = SmallVec<[GridCell; TRAIL_MAX_SEGMENTS as usize]>;

/// Playback time of one path segment.
#[inline]
pub fn segment_duration(lifetime: f32, segments: usize) -> f32 {
    lifetime * TRAIL_SPEED_SLOWDOWN / segments.max(1) as f32
}

/// Generate a bounded random walk starting at `origin`.
///
/// Each step draws up to `TRAIL_MOVES.len()` candidate moves and accepts the
/// first one that stays inside `[0, rows) x [0, cols)`. Running out of
/// candidates ends the walk early, so paths near the edges may come up short.
pub fn generate_path(rng: &mut impl Rng, origin: GridCell, rows: i32, cols: i32) -> TrailPath {
    let max_segments = rng.gen_range(TRAIL_MIN_SEGMENTS..=TRAIL_MAX_SEGMENTS);
    let mut path = TrailPath::new();
    let mut cur = origin;
    'walk: for _ in 0..max_segments {
        for _ in 0..TRAIL_MOVES.len() {
            let (d_row, d_col) = *TRAIL_MOVES.choose(rng).unwrap_or(&(0, 0));
            let next = GridCell::new(cur.row + d_row, cur.col + d_col);
            if next.row >= 0 && next.row < rows && next.col >= 0 && next.col < cols {
                path.push(next);
                cur = next;
                continue 'walk;
            }
        }
        break;
    }
    path
}

/// One decaying animated highlight walking its path across the grid.
#[derive(Clone, Debug)]
pub struct TrailEntity {
    pub origin: GridCell,
    pub age: f32,
    pub lifetime: f32,
    pub path: TrailPath,
    pub segment_index: usize,
    pub segment_progress: f32,
    pub segment_duration: f32,
    /// Interpolated (row, col) written to the shader.
    pub current: (f32, f32),
}

impl TrailEntity {
    fn new(rng: &mut impl Rng, origin: GridCell, rows: i32, cols: i32, lifetime: f32) -> Self {
        let path = generate_path(rng, origin, rows, cols);
        Self {
            origin,
            age: 0.0,
            lifetime,
            segment_duration: segment_duration(lifetime, path.len()),
            path,
            segment_index: 0,
            segment_progress: 0.0,
            current: (origin.row as f32, origin.col as f32),
        }
    }

    /// Reset an already-pooled entity in place instead of duplicating it.
    fn respawn(&mut self, rng: &mut impl Rng, rows: i32, cols: i32) {
        self.age = 0.0;
        self.segment_index = 0;
        self.segment_progress = 0.0;
        self.current = (self.origin.row as f32, self.origin.col as f32);
        self.path = generate_path(rng, self.origin, rows, cols);
        self.segment_duration = segment_duration(self.lifetime, self.path.len());
    }

    /// Age scaled to [0, 1] over the configured lifetime.
    #[inline]
    pub fn age_norm(&self) -> f32 {
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.age >= self.lifetime + TRAIL_FADE_FLOOR
    }

    fn step_playback(&mut self, dt: f32) {
        if self.path.is_empty() {
            return;
        }
        self.segment_progress += dt;
        while self.segment_progress >= self.segment_duration
            && self.segment_index < self.path.len()
        {
            self.segment_progress -= self.segment_duration;
            self.segment_index += 1;
            if self.segment_index >= self.path.len() {
                // Path exhausted: park at the final waypoint.
                self.segment_index = self.path.len() - 1;
                self.segment_progress = self.segment_duration;
                break;
            }
        }
        let prev = if self.segment_index == 0 {
            self.origin
        } else {
            self.path[self.segment_index - 1]
        };
        let target = self.path[self.segment_index];
        let t = if self.segment_duration > 0.0 {
            (self.segment_progress / self.segment_duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.current = lerp_cells(prev, target, t);
    }
}

/// Bounded pool of active trails. New entries go to the front; when the pool
/// overflows the back entry (oldest insertion not refreshed since) is evicted.
pub struct TrailPool {
    entries: Vec<TrailEntity>,
    capacity: usize,
    lifetime: f32,
    rng: StdRng,
}

impl TrailPool {
    pub fn new(capacity: usize, lifetime: f32, seed: u64) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            lifetime: lifetime.max(MIN_LIFETIME),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[TrailEntity] {
        &self.entries
    }

    /// Insert a trail at `origin`, or refresh the one already there.
    pub fn trigger(&mut self, origin: GridCell, rows: i32, cols: i32) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.origin == origin) {
            existing.respawn(&mut self.rng, rows, cols);
            return;
        }
        let entity = TrailEntity::new(&mut self.rng, origin, rows, cols, self.lifetime);
        self.entries.insert(0, entity);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
    }

    /// Roll each of the eight neighbors of a freshly entered cell.
    pub fn spawn_neighbors(&mut self, cell: GridCell, rows: i32, cols: i32) {
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let neighbor = GridCell::new(cell.row + d_row, cell.col + d_col);
                let in_bounds = neighbor.row >= 0
                    && neighbor.row < rows
                    && neighbor.col >= 0
                    && neighbor.col < cols;
                if in_bounds && self.rng.gen::<f32>() < TRAIL_NEIGHBOR_PROBABILITY {
                    self.trigger(neighbor, rows, cols);
                }
            }
        }
    }

    /// Age, play back and prune every trail. Iterates in reverse index order
    /// so removal keeps the remaining indices valid.
    pub fn advance(&mut self, dt: f32) {
        for i in (0..self.entries.len()).rev() {
            let entry = &mut self.entries[i];
            entry.age += dt;
            entry.step_playback(dt);
            if entry.expired() {
                self.entries.remove(i);
            }
        }
    }
}
