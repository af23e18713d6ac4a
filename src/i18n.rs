// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["zh-CN", "en"];

/// 默认语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

// rust-i18n 的 locale 为全局状态，且测试默认并行执行;
// 依赖 locale 的单元测试需持有此锁
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"zh-CN" 或 "en"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use attendance_report::i18n::t;
/// let msg = t("report.bucket.meal");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use attendance_report::i18n::t_with_args;
/// let msg = t_with_args("run.selected", &[("path", "/tmp/考勤.xlsx")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lock() -> std::sync::MutexGuard<'static, ()> {
        LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn test_set_locale() {
        let _guard = lock();
        set_locale("en");
        assert_eq!(current_locale(), "en");

        set_locale(DEFAULT_LOCALE);
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = lock();
        set_locale("zh-CN");
        assert_eq!(t("report.bucket.meal"), "用餐时长");

        set_locale("en");
        assert_eq!(t("report.bucket.meal"), "Meal time");

        set_locale(DEFAULT_LOCALE);
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = lock();
        set_locale("zh-CN");
        let msg = t_with_args("run.failed", &[("error", "文件不存在")]);
        assert_eq!(msg, "生成失败：文件不存在");

        set_locale("en");
        let msg = t_with_args("run.failed", &[("error", "missing")]);
        assert!(msg.contains("missing"));
        assert!(msg.contains("failed"));

        set_locale(DEFAULT_LOCALE);
    }
}
