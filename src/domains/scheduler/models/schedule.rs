use std::time::Duration;
use chrono::{DateTime, Days, NaiveTime, Utc};

/// 작업 실행 주기
/// When a job fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// 고정 간격
    Interval(Duration),
    /// 매일 지정 시각 (UTC)
    DailyAt(NaiveTime),
}

impl Schedule {
    /// 다음 실행까지 남은 시간
    /// Delay from `now` until the next firing
    pub fn next_delay(&self, now: DateTime<Utc>) -> Duration {
        match self {
            Schedule::Interval(every) => *every,
            Schedule::DailyAt(at) => {
                let today = now.date_naive().and_time(*at).and_utc();
                let next = if today > now {
                    today
                } else {
                    now.date_naive()
                        .checked_add_days(Days::new(1))
                        .map(|d| d.and_time(*at).and_utc())
                        .unwrap_or(today + chrono::Duration::days(1))
                };
                (next - now).to_std().unwrap_or(Duration::ZERO)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Schedule::Interval(every) => format!("every {}s", every.as_secs()),
            Schedule::DailyAt(at) => format!("daily at {} UTC", at.format("%H:%M")),
        }
    }
}
