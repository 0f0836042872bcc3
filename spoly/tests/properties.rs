use itertools::Itertools;
use num_traits::Zero;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use spoly::{Poly, Term};

type P = Poly<f64>;

const TRIALS: usize = 200;

// Integer-valued coefficients keep every sum and product exact.
fn random_poly(rng: &mut StdRng) -> P {
    let n = rng.gen_range(0..=6);
    P::from_iter((0..n).map(|_| {
        let d = rng.gen_range(0..=8);
        let r = rng.gen_range(-5..=5) as f64;
        (d, r)
    }))
}

fn is_normal(p: &P) -> bool {
    p.terms_desc().all(|t| !t.coeff.is_zero()) &&
    p.terms_desc().tuple_windows().all(|(s, t)| s.deg > t.deg)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn check<F>(seed: u64, f: F)
where F: Fn(&P, &P, &P) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..TRIALS {
        let (a, b, c) = (random_poly(&mut rng), random_poly(&mut rng), random_poly(&mut rng));
        f(&a, &b, &c);
    }
}

#[test]
fn add_identity() {
    check(1, |a, _, _| {
        assert_eq!(a + &P::zero(), a.clone());
    });
}

#[test]
fn add_commutative() {
    check(2, |a, b, _| {
        assert_eq!(a + b, b + a);
    });
}

#[test]
fn add_associative() {
    check(3, |a, b, c| {
        assert_eq!(&(a + b) + c, a + &(b + c));
    });
}

#[test]
fn cancellation() {
    check(4, |a, _, _| {
        assert!((a + &(-a)).is_zero());
        assert!((a - a).is_zero());
    });
}

#[test]
fn mul_commutative() {
    check(5, |a, b, _| {
        assert_eq!(a * b, b * a);
    });
}

#[test]
fn mul_annihilation() {
    check(6, |a, _, _| {
        assert!((a * &P::zero()).is_zero());
    });
}

#[test]
fn mul_distributes() {
    check(7, |a, b, c| {
        assert_eq!(a * &(b + c), &(a * b) + &(a * c));
    });
}

#[test]
fn outputs_are_normal() {
    check(8, |a, b, _| {
        assert!(is_normal(a));
        assert!(is_normal(&(a + b)));
        assert!(is_normal(&(a - b)));
        assert!(is_normal(&(a * b)));
    });
}

#[test]
fn eval_linear() {
    check(10, |a, b, _| {
        for x in [-2.0, -0.5, 0.0, 0.75, 1.0, 3.0] {
            assert!(close((a + b).eval(&x), a.eval(&x) + b.eval(&x)));
        }
    });
}

#[test]
fn eval_multiplicative() {
    check(11, |a, b, _| {
        for x in [-2.0, -0.5, 0.0, 0.75, 1.0, 3.0] {
            assert!(close((a * b).eval(&x), a.eval(&x) * b.eval(&x)));
        }
    });
}

#[test]
fn eval_empty() {
    for x in [-5.0, 0.0, 5.0, 1e10] {
        assert_eq!(P::zero().eval(&x), 0.0);
    }
}

#[test]
fn scenario_add() {
    let a = P::from(vec![Term::new(4.0, 5), Term::new(-2.0, 3), Term::new(2.0, 1), Term::new(3.0, 0)]);
    let b = P::from(vec![Term::new(1.0, 3), Term::new(-3.0, 0)]);
    let c = &a + &b;

    assert_eq!(c.terms_desc().cloned().collect_vec(), vec![
        Term::new(4.0, 5),
        Term::new(-1.0, 3),
        Term::new(2.0, 1),
    ]);
}

#[test]
fn scenario_mul() {
    let a = P::from(vec![Term::new(1.0, 1), Term::new(1.0, 0)]);
    let b = P::from(vec![Term::new(1.0, 1), Term::new(-1.0, 0)]);
    let c = &a * &b;

    assert_eq!(c.terms_desc().cloned().collect_vec(), vec![
        Term::new(1.0, 2),
        Term::new(-1.0, 0),
    ]);
}

#[test]
fn scenario_eval() {
    let a = P::from(vec![Term::new(4.0, 5), Term::new(-2.0, 3), Term::new(2.0, 1), Term::new(3.0, 0)]);
    assert_eq!(a.eval(&1.0), 7.0);
    assert_eq!(P::zero().eval(&5.0), 0.0);
}

#[test]
fn shared_across_threads() {
    let mut rng = StdRng::seed_from_u64(12);
    let (a, b) = (random_poly(&mut rng), random_poly(&mut rng));
    let expected = &a * &b;

    std::thread::scope(|s| {
        let handles = (0..4).map(|_| s.spawn(|| &a * &b)).collect_vec();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
