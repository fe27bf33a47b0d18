//! User-facing strings. The application is localized in Turkish only.

/// Sent by the proxy whenever a lookup fails, whatever the cause.
pub const LOOKUP_FAILED: &str = "Hava durumu verileri alınamadı";

/// Shown by the view when a failure carries no message of its own.
pub const GENERIC_ERROR: &str = "Bir hata oluştu";

pub const LOADING: &str = "Yükleniyor...";

pub const CITY_PLACEHOLDER: &str = "Hava durumunu öğrenmek istediğiniz şehri giriniz";
