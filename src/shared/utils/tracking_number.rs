//! 송장번호 생성기
//! Tracking Number Generator
//!
//! 택배사가 송장 발급 API를 제공하지 않을 때 로컬에서 송장번호를 만듭니다.
//! 형식: `{택배사코드}{yyMMdd}{순번 4자리}{난수 4자리}` (예: `CJ2401150001..`)
//!
//! 같은 프로세스 안에서는 AtomicU64 순번으로 중복을 피하고,
//! 재시작 후 충돌은 난수 꼬리로 피합니다.

use std::sync::atomic::{AtomicU64, Ordering};
use chrono::{DateTime, Utc};
use rand::Rng;

/// 송장번호 순번 카운터
static TRACKING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub struct TrackingNumberGenerator;

impl TrackingNumberGenerator {
    /// 다음 송장번호 생성
    /// Generate the next tracking number for a carrier
    pub fn generate(carrier_code: &str, now: DateTime<Utc>) -> String {
        let sequence = TRACKING_SEQUENCE.fetch_add(1, Ordering::SeqCst) % 10_000;
        let suffix: u16 = rand::thread_rng().gen_range(0..10_000);

        format!(
            "{}{}{:04}{:04}",
            carrier_code.to_uppercase(),
            now.format("%y%m%d"),
            sequence,
            suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn tracking_numbers_carry_code_and_date() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let number = TrackingNumberGenerator::generate("cj", now);

        assert!(number.starts_with("CJ240115"));
        assert_eq!(number.len(), 2 + 6 + 8);
    }

    #[test]
    fn consecutive_numbers_differ() {
        let now = Utc::now();
        let a = TrackingNumberGenerator::generate("HANJIN", now);
        let b = TrackingNumberGenerator::generate("HANJIN", now);
        assert_ne!(a, b);
    }
}
