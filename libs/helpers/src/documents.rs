use rand::{self, Rng, RngCore};
use rand_distr::{Distribution, Poisson};

/// Creates a vocabulary of random words (1 to 8 letters, mixed case)
pub fn create_vocabulary(vocabulary_size: usize, rng: &mut dyn RngCore) -> Vec<String> {
    (0..vocabulary_size)
        .map(|_| {
            let length = rng.gen_range(1..=8);
            (0..length)
                .map(|_| {
                    let c = rng.gen_range(b'a'..=b'z') as char;
                    if rng.gen_bool(0.2) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect()
        })
        .collect()
}

pub struct TestDocument {
    /// Words, in order of appearance
    pub words: Vec<String>,
}

impl TestDocument {
    /// Joins the words with random whitespace
    pub fn text(&self, rng: &mut dyn RngCore) -> String {
        let mut text = String::new();
        for word in self.words.iter() {
            text.push_str(word);
            text.push_str(match rng.gen_range(0..4) {
                0 => "\n",
                1 => "\t",
                2 => "   ",
                _ => " ",
            });
        }
        text
    }
}

pub fn create_document(
    lambda_words: f32,
    vocabulary: &[String],
    rng: &mut dyn RngCore,
) -> TestDocument {
    let poi = Poisson::new(lambda_words).unwrap();
    let num_words = 1 + poi.sample(rng) as usize;

    let words = (0..num_words)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())].clone())
        .collect();

    TestDocument { words }
}
