//! 소수점 자리수 반올림.
//!
//! 이진 부동소수의 정확한 10진 전개를 기준으로 반올림하고, 정확히 절반인 경우에는
//! 짝수 쪽으로 보낸다. `1.005`처럼 이진 표현이 절반보다 약간 작은 값은 내림된다.

/// `value`를 소수점 `decimals` 자리로 반올림한다. 유한하지 않은 값은 그대로 돌려준다.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // 표준 포맷터는 정확한 10진 전개 + 짝수 반올림을 사용한다
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// 소수점 둘째 자리 반올림. 계산 결과 대부분에 사용한다.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(490.5, 0), 490.0);
        assert_eq!(round_to(491.5, 0), 492.0);
    }

    #[test]
    fn binary_representation_decides() {
        // 1.005는 실제로 1.00499999...
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn negative_and_non_finite() {
        assert_eq!(round2(-3.14159), -3.14);
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }
}
