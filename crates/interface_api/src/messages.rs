//! Localized response messages
//!
//! The office runs in Arabic; every message a caller can see lives here.
//! Internal detail never reaches the response body; it is logged and the
//! caller gets the generic message for the error class.

/// Required fields missing or empty (400)
pub const REQUIRED_FIELDS: &str = "جميع الحقول المطلوبة يجب أن تكون مملوءة";

/// Section does not belong to the chosen judicial level (400)
pub const INVALID_SECTION: &str = "القسم المحدد غير متاح في هذه الجهة القضائية";

/// Case creation referenced a client that does not exist (400)
pub const UNKNOWN_CLIENT: &str = "الموكل غير موجود";

/// Client lookup failed (404)
pub const CLIENT_NOT_FOUND: &str = "الموكل غير موجود";

/// Case lookup failed (404)
pub const CASE_NOT_FOUND: &str = "القضية غير موجودة";

/// Legal text lookup failed (404)
pub const LEGAL_TEXT_NOT_FOUND: &str = "النص القانوني غير موجود";

/// No such route (404)
pub const ROUTE_NOT_FOUND: &str = "المسار غير موجود";

/// Storage or unexpected failure (500)
pub const SERVER_ERROR: &str = "خطأ في الخادم";
