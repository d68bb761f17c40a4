use rand::seq::IndexedRandom;
use rand::Rng;

use super::ContentError;

/// Fixed editorial pool; there is no news feed behind this.
const HEADLINES: [&str; 5] = [
    "Mediterranean diet proven to boost focus.",
    "Dark chocolate linked to heart health.",
    "Green tea trend skyrockets worldwide.",
    "Lab-grown meat gains regulatory momentum.",
    "AI predicts food waste can be cut by 40%.",
];

/// Picks `count` distinct headlines without replacement. The pool is larger
/// than any current request, but the guard stays in case the list shrinks.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<String>, ContentError> {
    if HEADLINES.len() < count {
        return Err(ContentError::NotEnoughHeadlines {
            wanted: count,
            available: HEADLINES.len(),
        });
    }

    Ok(HEADLINES
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn returns_three_distinct_headlines_from_the_pool() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let picked = sample(&mut rng, 3).unwrap();
            assert_eq!(picked.len(), 3);

            let unique: HashSet<&str> = picked.iter().map(String::as_str).collect();
            assert_eq!(unique.len(), 3);
            assert!(picked.iter().all(|h| HEADLINES.contains(&h.as_str())));
        }
    }

    #[test]
    fn rejects_oversized_requests() {
        let mut rng = rand::rng();
        assert!(matches!(
            sample(&mut rng, 6),
            Err(ContentError::NotEnoughHeadlines { wanted: 6, available: 5 })
        ));
    }
}
