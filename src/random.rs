use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug)]
pub struct Sample2D {
    pub x: f64,
    pub y: f64,
}

impl Sample2D {
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&x));
        debug_assert!((0.0..1.0).contains(&y));

        Sample2D { x, y }
    }
    pub fn new_random_sample() -> Self {
        Sample2D::new(rand::random(), rand::random())
    }
    /// Recenters both coordinates into [-0.5, 0.5), i.e. a sub-pixel offset.
    pub fn centered(self) -> (f64, f64) {
        (self.x - 0.5, self.y - 0.5)
    }
}

/// Source of uniform samples in [0, 1). Every draw is independent.
pub trait Sampler {
    fn draw_2d(&mut self) -> Sample2D;
}

/// Draws from the thread local generator.
pub struct RandomSampler {}

impl RandomSampler {
    pub const fn new() -> RandomSampler {
        RandomSampler {}
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        RandomSampler::new()
    }
}

impl Sampler for RandomSampler {
    fn draw_2d(&mut self) -> Sample2D {
        Sample2D::new_random_sample()
    }
}

/// Reproducible sampler. Seeding per pixel makes a render independent of how
/// pixels are scheduled across threads.
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> SeededSampler {
        SeededSampler {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn for_pixel(seed: u64, x: usize, y: usize) -> SeededSampler {
        // splitmix style mixing so neighbouring pixels get unrelated streams
        let mut h = seed ^ 0x9E37_79B9_7F4A_7C15;
        for v in [x as u64, y as u64] {
            h = (h ^ v).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            h ^= h >> 31;
        }
        SeededSampler::new(h)
    }
}

impl Sampler for SeededSampler {
    fn draw_2d(&mut self) -> Sample2D {
        Sample2D::new(self.rng.gen(), self.rng.gen())
    }
}

/// Chooses between the two samplers above for a given pixel.
pub fn pixel_sampler(seed: Option<u64>, x: usize, y: usize) -> Box<dyn Sampler> {
    match seed {
        Some(seed) => Box::new(SeededSampler::for_pixel(seed, x, y)),
        None => Box::new(RandomSampler::new()),
    }
}
