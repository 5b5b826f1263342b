use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::shared::errors::IntegrationError;

type HmacSha256 = Hmac<Sha256>;

fn keyed(platform: &str, secret: &str, message: &str) -> Result<HmacSha256, IntegrationError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| IntegrationError::new(platform, format!("invalid signing key: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(mac)
}

/// HMAC-SHA256 원시 바이트
pub fn hmac_sha256(platform: &str, secret: &str, message: &str) -> Result<Vec<u8>, IntegrationError> {
    Ok(keyed(platform, secret, message)?.finalize().into_bytes().to_vec())
}

/// 네이버 검색광고 서명: base64(HMAC(secret, "{timestamp}.{method}.{uri}"))
/// `uri` is the path without the query string
pub fn naver_ads_signature(
    secret: &str,
    timestamp: i64,
    method: &str,
    uri: &str,
) -> Result<String, IntegrationError> {
    let message = format!("{}.{}.{}", timestamp, method, uri);
    let digest = hmac_sha256("naver_ads", secret, &message)?;
    Ok(STANDARD.encode(digest))
}

/// 쿠팡 CEA 서명: hex(HMAC(secret, signed_date + method + path + query))
pub fn coupang_signature(
    secret: &str,
    signed_date: &str,
    method: &str,
    path: &str,
    query: &str,
) -> Result<String, IntegrationError> {
    let message = format!("{}{}{}{}", signed_date, method, path, query);
    let digest = keyed("coupang", secret, &message)?.finalize().into_bytes();
    Ok(format!("{:x}", digest))
}
