use serde::Serialize;
use utoipa::ToSchema;
use chrono::{DateTime, Utc};

/// 작업 상태 (Idle → Running → Idle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    Idle,
    Running,
}

/// 작업별 실행 현황
/// Snapshot of one job's bookkeeping
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    pub name: String,
    pub schedule: String,
    pub state: JobState,
    pub run_count: u64,
    /// 실행 중이라 건너뛴 횟수
    pub skipped_count: u64,
    pub last_started_at: Option<DateTime<Utc>>,
    pub last_finished_at: Option<DateTime<Utc>>,
    /// 마지막 실행에서 실패한 테넌트 수
    pub last_failed_tenants: usize,
}

impl JobStatus {
    pub fn idle(name: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schedule: schedule.into(),
            state: JobState::Idle,
            run_count: 0,
            skipped_count: 0,
            last_started_at: None,
            last_finished_at: None,
            last_failed_tenants: 0,
        }
    }
}

/// 스케줄러 현황 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = SchedulerStatus)]
pub struct SchedulerStatus {
    pub enabled: bool,
    pub jobs: Vec<JobStatus>,
}

/// 수동 실행 결과
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = JobRunReport)]
pub struct JobRunReport {
    pub job: String,
    pub tenants: usize,
    pub failed_tenants: usize,
    /// 이미 실행 중이어서 건너뛰었는지
    pub skipped: bool,
}
