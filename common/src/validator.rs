//! 入力検証
//!
//! 前後の空白を除いた内容に英数字が1文字以上含まれていれば有効。
//! 結果はキャッシュせず、呼び出しのたびに再計算する。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VALID_TEXT: Regex = Regex::new(r"[a-zA-Z0-9]").unwrap();
}

/// 1件の入力が有効か
pub fn is_valid(text: &str) -> bool {
    VALID_TEXT.is_match(text.trim())
}

/// 全件有効か（空の列は真）
pub fn all_valid<S: AsRef<str>>(items: &[S]) -> bool {
    items.iter().all(|item| is_valid(item.as_ref()))
}

/// 無効な入力の位置を列挙
pub fn invalid_indices<S: AsRef<str>>(items: &[S]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !is_valid(item.as_ref()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid("Stocks rally today"));
        assert!(is_valid("  a  "));
        assert!(is_valid("42"));
        assert!(!is_valid(""));
        assert!(!is_valid("   \t\n"));
        assert!(!is_valid("?!... --"));
    }

    #[test]
    fn test_non_ascii_letters_are_not_enough() {
        // 英数字クラスは ASCII のみ
        assert!(!is_valid("日本語のみ"));
        assert!(is_valid("日本語 2024"));
    }

    #[test]
    fn test_all_valid() {
        assert!(all_valid(&["one", "two 2"]));
        assert!(!all_valid(&["Stocks rally today", "  "]));
    }

    #[test]
    fn test_empty_sequence_is_vacuously_valid() {
        let empty: [&str; 0] = [];
        assert!(all_valid(&empty));
    }

    #[test]
    fn test_appending_whitespace_flips_all_valid() {
        let mut items = vec!["alpha".to_string(), "beta".to_string()];
        assert!(all_valid(&items));
        items.push("   ".to_string());
        assert!(!all_valid(&items));
    }

    #[test]
    fn test_invalid_indices() {
        let items = ["ok", "", "fine 1", "..."];
        assert_eq!(invalid_indices(&items), vec![1, 3]);
    }
}
