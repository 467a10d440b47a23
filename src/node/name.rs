use std::fmt::Debug;

pub trait NameGenerator: Debug {
    fn generate_name(&self, generate_name: &str) -> String;
}

/// Appends a random suffix to `generateName`, the way an API server does when it
/// creates an object without an explicit name.
#[derive(Debug, Clone, Copy)]
pub struct RandomSuffix {
    pub length: usize,
}

const SUFFIX_CHARSET: &[u8] = b"bcdfghjklmnpqrstvwxz2456789";

impl Default for RandomSuffix {
    fn default() -> Self {
        Self { length: 5 }
    }
}

impl NameGenerator for RandomSuffix {
    fn generate_name(&self, generate_name: &str) -> String {
        use rand::prelude::*;
        let mut rng = rand::thread_rng();

        let mut name = String::with_capacity(generate_name.len() + self.length);
        name.push_str(generate_name);
        for _ in 0..self.length {
            name.push(SUFFIX_CHARSET[rng.gen_range(0, SUFFIX_CHARSET.len())] as char);
        }

        name
    }
}
