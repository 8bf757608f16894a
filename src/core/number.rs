//! 純函數：數論性質計算。因數和與次方和都在 u128 中累加，任何 u64 輸入都不會溢位。

pub fn is_even(n: u64) -> bool {
    n % 2 == 0
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    (3..=n.isqrt()).step_by(2).all(|i| n % i != 0)
}

/// 真因數和是否等於 n
pub fn is_perfect(n: u64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut total: u128 = 1;
    for i in 2..=n.isqrt() {
        if n % i == 0 {
            total += i as u128;
            let other = n / i;
            if other != i {
                total += other as u128;
            }
            // 因數和只增不減，超過 n 即可判定
            if total > n as u128 {
                return false;
            }
        }
    }
    total == n as u128
}

pub fn digit_sum(n: u64) -> u64 {
    let mut n = n;
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

fn digits(n: u64) -> Vec<u32> {
    if n == 0 {
        return vec![0];
    }
    let mut n = n;
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u32);
        n /= 10;
    }
    digits.reverse();
    digits
}

pub fn is_armstrong(n: u64) -> bool {
    let digits = digits(n);
    let power = digits.len() as u32;
    let total: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    total == n as u128
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_is_prime(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|i| i * i <= n).all(|i| n % i != 0)
    }

    #[test]
    fn test_is_prime_matches_reference() {
        for n in 0..=10_000 {
            assert_eq!(is_prime(n), reference_is_prime(n), "mismatch at {}", n);
        }
    }

    #[test]
    fn test_is_prime_edge_cases() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(u64::MAX));
    }

    #[test]
    fn test_is_perfect() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
        assert!(!is_perfect(12));
        assert!(!is_perfect(945));
        assert!(!is_perfect(1));
        assert!(!is_perfect(0));
        // 平方數的因數不可重複計算
        assert!(!is_perfect(16));
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(12345), 15);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn test_is_armstrong() {
        assert!(is_armstrong(153));
        assert!(!is_armstrong(154));
        assert!(is_armstrong(9474));
        assert!(is_armstrong(370));
        assert!(!is_armstrong(10));
        for n in 0..10 {
            assert!(is_armstrong(n));
        }
    }

    #[test]
    fn test_large_inputs_do_not_overflow() {
        assert!(!is_armstrong(u64::MAX));
        assert!(!is_perfect(999_999_999_989));
        assert!(!is_perfect(10_000_000_000_000_000_000));
    }
}
