/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 송장번호 생성기 (택배사 API가 없을 때)
/// - 페이지네이션 계산
pub mod tracking_number;
pub mod pagination;

pub use tracking_number::*;
pub use pagination::*;
