// Commerce dashboard backend
// 주문 관리, 광고/마켓플레이스 연동, 알림, 백그라운드 작업
pub mod domains;
pub mod routes;
pub mod shared;
