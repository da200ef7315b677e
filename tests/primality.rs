//! Primality sweeps: agreement with a sieve over the small naturals,
//! Carmichael rejection, and prime search.

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use mpint::{probably_prime, BigInt, RandBigInt};

fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit];
    is_prime[0] = false;
    is_prime[1] = false;
    let mut i = 2;
    while i * i < limit {
        if is_prime[i] {
            let mut j = i * i;
            while j < limit {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    is_prime
}

#[test]
fn agrees_with_a_sieve_below_ten_thousand() {
    let mut rng = XorShiftRng::from_seed([40u8; 16]);
    let table = sieve(10_000);
    for (n, &expect) in table.iter().enumerate() {
        assert_eq!(
            probably_prime(&BigInt::from(n), &mut rng),
            expect,
            "misclassified {n}"
        );
    }
}

#[test]
fn rejects_carmichael_numbers() {
    let mut rng = XorShiftRng::from_seed([41u8; 16]);
    // Carmichael numbers up to 10^7: Fermat liars to every coprime base,
    // caught only by the Miller-Rabin squaring chain.
    const CARMICHAEL: [u32; 24] = [
        561, 1105, 1729, 2465, 2821, 6601, 8911, 10585, 15841, 29341, 41041, 46657, 52633, 62745,
        63973, 75361, 101101, 115921, 126217, 162401, 252601, 410041, 1024651, 9890881,
    ];
    for &n in CARMICHAEL.iter() {
        assert!(!probably_prime(&BigInt::from(n), &mut rng), "{n}");
    }
}

#[test]
fn search_moves_by_odd_steps_to_a_prime() {
    let mut rng = XorShiftRng::from_seed([42u8; 16]);
    for _ in 0..10 {
        let start = rng.gen_bigint(80);
        let p = start.next_prime_with(&mut rng);
        assert!(probably_prime(&p, &mut rng));
        assert!(p >= start);
    }
}

#[test]
fn search_vector_at_the_128_bit_boundary() {
    let n = BigInt::from_str_radix("10000000000000000000000000000000", 16).unwrap();
    let p = n.next_prime();
    assert_eq!(
        p.to_str_radix(16).unwrap(),
        "10000000000000000000000000000043"
    );
}

#[test]
fn witness_rounds_scale_down_for_large_candidates() {
    // a 1024-bit prime (RFC 5114) must still pass at the 3-round level
    let p = BigInt::from_str_radix(
        "B10B8F96A080E01DDE92DE5EAE5D54EC52C99FBCFB06A3C69A6A9DCA52D23B61\
         6073E28675A23D189838EF1E2EE652C013ECB4AEA906112324975C3CD49B83BF\
         ACCBDD7D90C4BD7098488E9C219A73724EFFD6FAE5644738FAA31A4FF55BCCC0\
         A151AF5F0DC8B4BD45BF37DF365C1A65E68CFDA76D4DA708DF1FB2BC2E4A4371",
        16,
    )
    .unwrap();
    let mut rng = XorShiftRng::from_seed([43u8; 16]);
    assert!(probably_prime(&p, &mut rng));
}
