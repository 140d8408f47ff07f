//! Deterministic joining of message and performance-data fragments.
//!
//! Fragments are always sorted before joining, single-element lists
//! included, so that output does not depend on source enumeration order.

use std::fmt::Display;

/// Sort fragments and join them with a single space.
pub fn join_perf_data(mut fragments: Vec<String>) -> String {
    fragments.sort();
    fragments.join(" ")
}

/// Sort fragments, join them with `", "` and prepend `prefix`.
///
/// An empty list gives an empty string, without the prefix.
pub fn join_messages(prefix: &str, mut fragments: Vec<String>) -> String {
    if fragments.is_empty() {
        return String::new();
    }
    fragments.sort();
    format!("{}{}", prefix, fragments.join(", "))
}

/// `label=value`
pub fn perf_value(label: &str, value: impl Display) -> String {
    format!("{}={}", label, value)
}

/// `label=value;;;0;max`: a value with its 0..max range.
pub fn perf_bounded(label: &str, value: impl Display, max: impl Display) -> String {
    format!("{}={};;;0;{}", label, value, max)
}

/// `'item' (value)`
pub fn item_value(item: &str, value: impl Display) -> String {
    format!("'{}' ({})", item, value)
}

/// `'item' (value/capacity)`
pub fn item_ratio(item: &str, value: i64, capacity: i64) -> String {
    format!("'{}' ({}/{})", item, value, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_perf_data_sorts() {
        assert_eq!(join_perf_data(strings(&["b=2", "a=1"])), "a=1 b=2");
    }

    #[test]
    fn test_join_perf_data_empty() {
        assert_eq!(join_perf_data(Vec::new()), "");
    }

    #[test]
    fn test_join_perf_data_single() {
        assert_eq!(join_perf_data(strings(&["jta-activeCount=3"])), "jta-activeCount=3");
    }

    #[test]
    fn test_join_messages_sorts_and_prefixes() {
        assert_eq!(
            join_messages("x: ", strings(&["zeta", "alpha"])),
            "x: alpha, zeta"
        );
    }

    #[test]
    fn test_join_messages_empty_has_no_prefix() {
        assert_eq!(join_messages("x: ", Vec::new()), "");
    }

    #[test]
    fn test_join_is_byte_order() {
        // uppercase sorts before lowercase
        assert_eq!(join_perf_data(strings(&["b", "B", "a"])), "B a b");
    }

    #[test]
    fn test_perf_helpers() {
        assert_eq!(perf_value("app-shop#shop.war", 12), "app-shop#shop.war=12");
        assert_eq!(
            perf_bounded("pool-default-size", 15, 50),
            "pool-default-size=15;;;0;50"
        );
        assert_eq!(
            perf_bounded("jvm-heapSize", "256MB", 512),
            "jvm-heapSize=256MB;;;0;512"
        );
    }

    #[test]
    fn test_item_helpers() {
        assert_eq!(item_value("shop#shop.war", 120), "'shop#shop.war' (120)");
        assert_eq!(item_ratio("default", 15, 50), "'default' (15/50)");
    }
}
