// 🔢 Number Games - fizzbuzz, primality, fibonacci, factors

/// FizzBuzz sequence for 1..=count
pub fn fizzbuzz(count: u32) -> Vec<String> {
    (1..=count)
        .map(|n| {
            if n % 15 == 0 {
                "FizzBuzz".to_string()
            } else if n % 3 == 0 {
                "Fizz".to_string()
            } else if n % 5 == 0 {
                "Buzz".to_string()
            } else {
                n.to_string()
            }
        })
        .collect()
}

/// Trial-division primality check
pub fn is_prime(number: i64) -> bool {
    if number <= 1 {
        return false;
    }

    // i <= number / i rather than i * i <= number: the square overflows
    // i64 for candidates near i64::MAX
    let mut i: i64 = 2;
    while i <= number / i {
        if number % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Largest sequence length whose every term fits in a u64
const MAX_FIBONACCI_TERMS: u32 = 93;

/// First `count` Fibonacci numbers, starting 0, 1.
///
/// The sequence stops early once the next term no longer fits in a u64,
/// so at most 93 terms are returned regardless of `count`.
pub fn fibonacci(count: u32) -> Vec<u64> {
    let mut sequence = Vec::with_capacity(count.min(MAX_FIBONACCI_TERMS) as usize);
    let (mut a, mut b): (u64, u64) = (0, 1);
    for _ in 0..count {
        sequence.push(a);
        let Some(next) = a.checked_add(b) else { break };
        a = b;
        b = next;
    }
    sequence
}

/// All divisors of `number` in ascending order
pub fn factors(number: u64) -> Vec<u64> {
    (1..=number).filter(|i| number % i == 0).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizzbuzz_sequence() {
        let seq = fizzbuzz(15);
        assert_eq!(seq.len(), 15);
        assert_eq!(seq[0], "1");
        assert_eq!(seq[2], "Fizz");
        assert_eq!(seq[4], "Buzz");
        assert_eq!(seq[14], "FizzBuzz");
    }

    #[test]
    fn test_fizzbuzz_zero() {
        assert!(fizzbuzz(0).is_empty());
    }

    #[test]
    fn test_primes() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(97));
        assert!(is_prime(7919));
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
        assert!(!is_prime(100));
        // Perfect square of a prime
        assert!(!is_prime(49));
    }

    #[test]
    fn test_primes_near_i64_max() {
        // The old squared loop bound overflowed here; i64::MAX = 7^2 * ...
        assert!(!is_prime(i64::MAX));
        // 2^31 - 1 is a Mersenne prime
        assert!(is_prime(2_147_483_647));
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0), Vec::<u64>::new());
        assert_eq!(fibonacci(1), vec![0]);
        assert_eq!(fibonacci(8), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_fibonacci_stops_before_overflow() {
        let full = fibonacci(93);
        assert_eq!(full.len(), 93);
        assert_eq!(*full.last().unwrap(), 7_540_113_804_746_346_429);

        // Requests past the u64 range return the capped sequence instead
        // of overflowing
        assert_eq!(fibonacci(94), full);
        assert_eq!(fibonacci(u32::MAX).len(), 93);
    }

    #[test]
    fn test_factors() {
        assert_eq!(factors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(factors(7), vec![1, 7]);
        assert_eq!(factors(1), vec![1]);
    }
}
