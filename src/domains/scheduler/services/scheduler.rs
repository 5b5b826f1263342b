use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::domains::scheduler::models::{JobRunReport, JobState, JobStatus, Schedule, SchedulerStatus};
use crate::domains::scheduler::services::TenantJob;
use crate::shared::database::CompanyStore;
use crate::shared::errors::AppError;

/// 작업 정의
pub struct JobDescriptor {
    pub name: &'static str,
    pub schedule: Schedule,
    pub job: Arc<dyn TenantJob>,
}

impl JobDescriptor {
    pub fn new(name: &'static str, schedule: Schedule, job: Arc<dyn TenantJob>) -> Self {
        Self { name, schedule, job }
    }
}

/// 백그라운드 작업 스케줄러
/// Background job scheduler
///
/// 역할:
/// - 작업마다 백그라운드 태스크 하나 (고정 간격 또는 매일 지정 시각)
/// - 활성 테넌트를 순서대로 처리, 한 테넌트가 실패해도 다음 테넌트 진행
/// - 이미 실행 중인 작업의 다음 tick은 건너뜀 (중첩 실행 없음)
/// - API로 활성화/비활성화, 수동 실행, 현황 조회
///
/// 재시도/백오프 없음: 실패한 실행은 다음 주기에 다시 시도됨
#[derive(Clone)]
pub struct Scheduler {
    jobs: Arc<Vec<JobDescriptor>>,
    companies: Arc<dyn CompanyStore>,
    status: Arc<RwLock<HashMap<&'static str, JobStatus>>>,
    enabled: Arc<AtomicBool>,
}

/// 실행 종료 시 상태를 Idle로 되돌림 (실행 중 future가 취소되어도)
struct RunGuard {
    status: Arc<RwLock<HashMap<&'static str, JobStatus>>>,
    name: &'static str,
    failed_tenants: usize,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        if let Some(job) = self.status.write().get_mut(self.name) {
            job.state = JobState::Idle;
            job.run_count += 1;
            job.last_finished_at = Some(Utc::now());
            job.last_failed_tenants = self.failed_tenants;
        }
    }
}

impl Scheduler {
    pub fn new(companies: Arc<dyn CompanyStore>, jobs: Vec<JobDescriptor>, enabled: bool) -> Self {
        let status = jobs
            .iter()
            .map(|d| (d.name, JobStatus::idle(d.name, d.schedule.describe())))
            .collect();

        Self {
            jobs: Arc::new(jobs),
            companies,
            status: Arc::new(RwLock::new(status)),
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// 스케줄러 시작
    /// Spawn one timer task per job
    pub fn start(&self) {
        for descriptor in self.jobs.iter() {
            let scheduler = self.clone();
            let name = descriptor.name;
            let schedule = descriptor.schedule;

            info!(job = name, schedule = %schedule.describe(), "Scheduling job");

            tokio::spawn(async move {
                match schedule {
                    Schedule::Interval(every) => {
                        let mut interval = interval_at(Instant::now() + every, every);
                        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

                        loop {
                            interval.tick().await;
                            scheduler.tick(name).await;
                        }
                    }
                    Schedule::DailyAt(_) => loop {
                        sleep(schedule.next_delay(Utc::now())).await;
                        scheduler.tick(name).await;
                    },
                }
            });
        }
    }

    /// 타이머 tick (비활성화 상태면 무시)
    async fn tick(&self, name: &'static str) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.run_job(name).await {
            error!(job = name, "Scheduled run failed: {}", e);
        }
    }

    /// 작업 1회 실행 (타이머와 수동 실행 공통)
    /// Runs the job for every active company. A run arriving while the job is
    /// already running is skipped and reported as such.
    pub async fn run_job(&self, name: &str) -> Result<JobRunReport, AppError> {
        let descriptor = self
            .jobs
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| AppError::not_found(format!("Unknown job: {}", name)))?;

        let Some(mut guard) = self.try_begin(descriptor.name) else {
            warn!(job = descriptor.name, "Job is still running, skipping this run");
            return Ok(JobRunReport {
                job: descriptor.name.to_string(),
                tenants: 0,
                failed_tenants: 0,
                skipped: true,
            });
        };

        let companies = self.companies.list_active().await?;

        for company in &companies {
            if let Err(e) = descriptor.job.run_for_company(company).await {
                error!(job = descriptor.name, company_id = company.id, "Tenant run failed: {}", e);
                guard.failed_tenants += 1;
            }
        }

        info!(
            job = descriptor.name,
            tenants = companies.len(),
            failed = guard.failed_tenants,
            "Job run finished"
        );

        Ok(JobRunReport {
            job: descriptor.name.to_string(),
            tenants: companies.len(),
            failed_tenants: guard.failed_tenants,
            skipped: false,
        })
    }

    /// Idle → Running (이미 Running이면 None)
    fn try_begin(&self, name: &'static str) -> Option<RunGuard> {
        let mut status = self.status.write();
        let job = status.get_mut(name)?;

        if job.state == JobState::Running {
            job.skipped_count += 1;
            return None;
        }

        job.state = JobState::Running;
        job.last_started_at = Some(Utc::now());

        Some(RunGuard {
            status: self.status.clone(),
            name,
            failed_tenants: 0,
        })
    }

    /// 현황 조회 (작업 등록 순서)
    pub fn status(&self) -> SchedulerStatus {
        let status = self.status.read();
        SchedulerStatus {
            enabled: self.is_enabled(),
            jobs: self
                .jobs
                .iter()
                .filter_map(|d| status.get(d.name).cloned())
                .collect(),
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}
