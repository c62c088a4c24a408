// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use heurist_model::city::Cities;
use heurist_tour::exact::exact_tour;
use heurist_tour::nearest_neighbor::nearest_neighbor_tour;
use heurist_tour::two_opt::two_opt_improve;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const EPS: f64 = 1e-9;

fn random_cities(rng: &mut ChaCha8Rng, n: usize) -> Cities<f64> {
    Cities::from_pairs(
        (0..n).map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0))),
    )
    .expect("at least two cities")
}

#[test]
fn test_every_tour_is_closed_and_visits_each_city_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..100 {
        let n = rng.random_range(2..=8);
        let cities = random_cities(&mut rng, n);

        let nn = nearest_neighbor_tour(&cities);
        let improved = two_opt_improve(&cities, &nn);
        let (exact, _) = exact_tour(&cities);

        for tour in [&nn, &improved, &exact] {
            assert_eq!(tour.stops().len(), n + 1);
            assert!(tour.is_closed());
            assert!(tour.visits_each_city_once(n));
            assert_eq!(tour.stops()[0], cities.start());
        }
    }
}

#[test]
fn test_two_opt_never_worsens_and_is_idempotent() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..100 {
        let n = rng.random_range(2..=30);
        let cities = random_cities(&mut rng, n);

        let nn = nearest_neighbor_tour(&cities);
        let improved = two_opt_improve(&cities, &nn);
        assert!(improved.cost() <= nn.cost() + EPS);

        let again = two_opt_improve(&cities, &improved);
        assert_eq!(again.stops(), improved.stops());
        assert!((again.cost() - improved.cost()).abs() <= EPS);
    }
}

#[test]
fn test_exact_is_a_lower_bound_for_the_heuristics() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..60 {
        let n = rng.random_range(2..=8);
        let cities = random_cities(&mut rng, n);

        let nn = nearest_neighbor_tour(&cities);
        let improved = two_opt_improve(&cities, &nn);
        let (exact, cost) = exact_tour(&cities);

        assert!((exact.cost() - cost).abs() <= EPS);
        assert!(cost <= nn.cost() + EPS);
        assert!(cost <= improved.cost() + EPS);
    }
}
