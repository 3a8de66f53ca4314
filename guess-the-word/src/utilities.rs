use std::fmt;

use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument(pub String);

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl std::error::Error for InvalidArgument {}

/// Uniform integer in `[ceil(min), floor(max)]`, both ends included.
pub fn random_in_range_inclusive<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<i64, InvalidArgument> {
    if !min.is_finite() || !max.is_finite() {
        return Err(InvalidArgument(format!(
            "provided min {min} or max {max} is not a valid number"
        )));
    }
    let (low, high) = (min.ceil() as i64, max.floor() as i64);
    if low > high {
        return Err(InvalidArgument(format!(
            "range {min}..={max} holds no integer"
        )));
    }
    Ok(rng.gen_range(low..=high))
}

/// Random element of `items`, `None` when there is nothing to pick.
pub fn pick<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
) -> Result<Option<&'a T>, InvalidArgument> {
    if items.is_empty() {
        return Ok(None);
    }
    let index = random_in_range_inclusive(rng, 0.0, (items.len() - 1) as f64)?;
    Ok(items.get(index as usize))
}

/// Shuffles the letters of `word`. Every letter is swapped with one strictly after it,
/// so each position ends up holding a letter from a different index. Repeated letters
/// can still leave the word unchanged, as with `"aa"`.
pub fn jumble<R: Rng + ?Sized>(rng: &mut R, word: &str) -> Result<String, InvalidArgument> {
    let mut letters: Vec<char> = word.chars().collect();
    let last = letters.len().saturating_sub(1);
    for i in 0..last {
        let j = random_in_range_inclusive(rng, (i + 1) as f64, last as f64)?;
        letters.swap(i, j as usize);
    }
    Ok(letters.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn sorted(word: &str) -> Vec<char> {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let mut rng = rng();
        let values: Vec<i64> = (0..10_000)
            .map(|_| random_in_range_inclusive(&mut rng, 3.0, 9.0).unwrap())
            .collect();
        assert!(values.iter().all(|value| (3..=9).contains(value)));
        assert_eq!(values.iter().min(), Some(&3));
        assert_eq!(values.iter().max(), Some(&9));
    }

    #[test]
    fn fractional_bounds_are_rounded_inward() {
        let mut rng = rng();
        for _ in 0..1_000 {
            let value = random_in_range_inclusive(&mut rng, 1.2, 2.8).unwrap();
            assert_eq!(value, 2);
        }
    }

    #[test]
    fn single_value_range() {
        assert_eq!(random_in_range_inclusive(&mut rng(), 4.0, 4.0), Ok(4));
    }

    #[test]
    fn non_finite_bounds_are_invalid() {
        let mut rng = rng();
        assert!(random_in_range_inclusive(&mut rng, f64::NAN, 3.0).is_err());
        assert!(random_in_range_inclusive(&mut rng, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn empty_range_is_invalid() {
        assert!(random_in_range_inclusive(&mut rng(), 5.0, 1.0).is_err());
    }

    #[test]
    fn pick_from_empty_is_none() {
        let empty: [String; 0] = [];
        assert_eq!(pick(&mut rng(), &empty), Ok(None));
        assert_eq!(pick(&mut rng(), &["only"]), Ok(Some(&"only")));
    }

    #[test]
    fn jumble_keeps_the_letters() {
        let mut rng = rng();
        for word in ["house", "mississippi", "ab", "naïve"] {
            let jumbled = jumble(&mut rng, word).unwrap();
            assert_eq!(sorted(&jumbled), sorted(word));
            assert_ne!(jumbled, word);
        }
    }

    #[test]
    fn jumble_moves_every_position() {
        let mut rng = rng();
        let word: Vec<char> = "abcdefgh".chars().collect();
        for _ in 0..200 {
            let jumbled: Vec<char> = jumble(&mut rng, "abcdefgh").unwrap().chars().collect();
            assert!(word.iter().zip(&jumbled).all(|(before, after)| before != after));
        }
        assert_eq!(jumble(&mut rng, "aa").unwrap(), "aa");
    }

    #[test]
    fn jumble_short_words() {
        let mut rng = rng();
        assert_eq!(jumble(&mut rng, "").unwrap(), "");
        assert_eq!(jumble(&mut rng, "a").unwrap(), "a");
        assert_eq!(jumble(&mut rng, "ab").unwrap(), "ba");
    }
}
