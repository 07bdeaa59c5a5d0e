use crate::Corpus;
use quickcheck::{Arbitrary, Gen};

#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub corpus: Corpus<u32>,
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n = 1 + usize::arbitrary(g) % N;
        let mut corpus: Corpus<u32> = (0..n as u32).map(|u| (u, Default::default())).collect();
        for _ in 0..(n * 2) {
            let u = (usize::arbitrary(g) % n) as u32;
            let v = (usize::arbitrary(g) % n) as u32;
            if u != v {
                corpus.get_mut(&u).unwrap().insert(v);
            }
        }
        Self { corpus }
    }
}

/// Rename every page of `corpus` through `f`, which must be injective.
pub fn relabel<F>(corpus: &Corpus<u32>, f: F) -> Corpus<u32>
where
    F: Fn(u32) -> u32,
{
    corpus
        .iter()
        .map(|(u, vs)| (f(*u), vs.iter().map(|v| f(*v)).collect()))
        .collect()
}
