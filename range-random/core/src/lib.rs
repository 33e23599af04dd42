// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod random;
pub use random::Random;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod rand_random;
pub use rand_random::RandRandom;

pub mod seeded_random;
pub use seeded_random::SeededRandom;

mod number;
pub use number::{Number, Primitive};

mod bounds;
pub use bounds::Bounds;

mod range_error;
pub use range_error::RangeError;

mod range_random;
pub use range_random::{random_number, random_number_from_args, random_number_with, RangeRandom};

pub mod stats;
