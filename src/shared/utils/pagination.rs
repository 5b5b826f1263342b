use serde::Serialize;
use utoipa::ToSchema;

/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 최대 페이지 크기
pub const MAX_PAGE_SIZE: u32 = 100;

/// 페이지 요청 (1부터 시작)
/// Page request, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    /// 페이지/크기 검증 (0 이하는 거부, 크기는 최대값으로 제한)
    /// Returns `None` when page or limit is zero; clamps limit to `MAX_PAGE_SIZE`
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Option<Self> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if page == 0 || limit == 0 {
            return None;
        }
        Some(Self { page, limit: limit.min(MAX_PAGE_SIZE) })
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    pub fn total_pages(&self, total_count: i64) -> u32 {
        if total_count <= 0 {
            return 0;
        }
        ((total_count as u64 + self.limit as u64 - 1) / self.limit as u64) as u32
    }
}

/// 페이지 응답 메타데이터
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_count: i64,
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageInfo {
    pub fn new(request: PageRequest, total_count: i64) -> Self {
        Self {
            total_count,
            current_page: request.page,
            total_pages: request.total_pages(total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_ten_skips_ten() {
        let page = PageRequest::new(Some(2), Some(10)).unwrap();
        assert_eq!(page.offset(), 10);
        assert_eq!(page.total_pages(25), 3);
        assert_eq!(page.total_pages(0), 0);
    }

    #[test]
    fn zero_is_rejected_and_limit_clamped() {
        assert!(PageRequest::new(Some(0), None).is_none());
        assert!(PageRequest::new(None, Some(0)).is_none());
        assert_eq!(PageRequest::new(None, Some(500)).unwrap().limit, MAX_PAGE_SIZE);
    }
}
