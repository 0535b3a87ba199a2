//! 系统主题检测（Auto 模式用）

/// 检测系统是否为深色模式
///
/// macOS 下 `defaults` 只在深色模式存在 AppleInterfaceStyle 键；
/// 读取失败视为浅色。
#[cfg(target_os = "macos")]
pub fn detect_system_theme() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|out| {
            out.status.success()
                && String::from_utf8_lossy(&out.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

/// 非 macOS 系统没有可靠的探测手段，一律视为深色（终端更常见）
#[cfg(not(target_os = "macos"))]
pub fn detect_system_theme() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_system_theme_does_not_panic() {
        let _is_dark = detect_system_theme();
    }
}
