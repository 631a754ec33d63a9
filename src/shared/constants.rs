/// Default page size for paginated admin listings
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of latest reports and matches shown on the admin dashboard
pub const DASHBOARD_LIMIT: i64 = 50;

/// Image extensions accepted by the image store (lowercase)
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

pub const MSG_SEARCH_VALUE_REQUIRED: &str = "يرجى إدخال قيمة للبحث";

pub const MSG_REPORT_FIELDS_REQUIRED: &str =
    "لازم اسم العربية ورقم هاتف وواحد على الأقل من الشاسي أو اللوحة.";

pub const MSG_REPORT_FIELD_TOO_LONG: &str = "أحد الحقول أطول من المسموح. يرجى اختصاره.";

pub const MSG_REPORT_MATCHED: &str =
    "تم تسجيل البلاغ ووجدنا تطابقاً. تواصل مع الوسيط لإكمال الإجراءات.";

pub const MSG_LOST_REPORT_RECORDED: &str =
    "تم تسجيل بلاغ الفقدان بنجاح. سننبه عند ظهور رصد مطابق.";

pub const MSG_SIGHTING_REPORT_RECORDED: &str =
    "تم تسجيل بلاغ الرصد. لو في فقدان مطابق لاحقاً، سيظهر في نتائج البحث.";

pub const MSG_ADMIN_WRONG_PASSWORD: &str = "كلمة المرور غير صحيحة.";
