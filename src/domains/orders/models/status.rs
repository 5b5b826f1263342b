use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// 주문 상태
// =====================================================
// 정상 흐름: new → confirmed → preparing → shipped → delivered
// (단계는 건너뛸 수 있지만 되돌릴 수 없음)
//
// 예외 상태:
// - cancelled: 출고(shipped) 전에만 가능
// - returned: 출고 또는 배송 완료 후에만 가능
// 두 예외 상태는 종료 상태 (이후 전이 없음)
// =====================================================

/// 주문 상태
/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Confirmed,
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::New,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    /// 정상 흐름에서의 순서 (예외 상태는 None)
    fn happy_path_rank(&self) -> Option<u8> {
        match self {
            OrderStatus::New => Some(0),
            OrderStatus::Confirmed => Some(1),
            OrderStatus::Preparing => Some(2),
            OrderStatus::Shipped => Some(3),
            OrderStatus::Delivered => Some(4),
            OrderStatus::Cancelled | OrderStatus::Returned => None,
        }
    }

    /// 종료 상태 여부
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Returned)
    }

    /// 출고 이후 상태인지 (취소 불가)
    /// Whether the order has left the warehouse
    pub fn is_shipped_or_later(&self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Delivered | OrderStatus::Returned)
    }

    /// 상태 전이 가능 여부
    /// Whether `self -> next` is allowed. Same status is always allowed (no-op).
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if *self == next {
            return true;
        }

        match next {
            OrderStatus::Cancelled => matches!(
                self,
                OrderStatus::New | OrderStatus::Confirmed | OrderStatus::Preparing
            ),
            OrderStatus::Returned => matches!(self, OrderStatus::Shipped | OrderStatus::Delivered),
            _ => match (self.happy_path_rank(), next.happy_path_rank()) {
                (Some(current), Some(target)) => target > current,
                _ => false,
            },
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown order status: {}", s))
    }
}

/// 결제 상태
/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(PaymentStatus::Paid),
            "pending" => Ok(PaymentStatus::Pending),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            "refunded" => Ok(PaymentStatus::Refunded),
            other => Err(format!("Unknown payment status: {}", other)),
        }
    }
}

/// 판매 채널 (마켓플레이스)
/// Sales channel the order came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Coupang,
    Naver,
    Gmarket,
    Smartstore,
    #[serde(rename = "11st")]
    Elevenst,
    Auction,
    Website,
    Amazon,
    Ebay,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Coupang,
        Platform::Naver,
        Platform::Gmarket,
        Platform::Smartstore,
        Platform::Elevenst,
        Platform::Auction,
        Platform::Website,
        Platform::Amazon,
        Platform::Ebay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Coupang => "coupang",
            Platform::Naver => "naver",
            Platform::Gmarket => "gmarket",
            Platform::Smartstore => "smartstore",
            Platform::Elevenst => "11st",
            Platform::Auction => "auction",
            Platform::Website => "website",
            Platform::Amazon => "amazon",
            Platform::Ebay => "ebay",
        }
    }

    /// 동기화 주문번호 접두어
    /// Prefix for order numbers of orders pulled from this platform
    pub fn order_number_prefix(&self) -> &'static str {
        match self {
            Platform::Coupang => "CP",
            Platform::Naver => "NV",
            Platform::Gmarket => "GM",
            Platform::Smartstore => "SS",
            Platform::Elevenst => "ST",
            Platform::Auction => "AU",
            Platform::Website => "WEB",
            Platform::Amazon => "AMZ",
            Platform::Ebay => "EB",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .copied()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| format!("Unknown platform: {}", s))
    }
}
