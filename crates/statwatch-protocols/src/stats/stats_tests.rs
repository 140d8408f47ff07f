use super::*;

#[test]
fn test_count_accessors() {
    let stat = Statistic::Count { count: 42 };
    assert_eq!(stat.as_count(), Some(42));
    assert_eq!(stat.as_range_current(), None);
    assert_eq!(stat.as_bounded(), None);
    assert_eq!(stat.as_time_mean(), None);
}

#[test]
fn test_bounded_range_is_a_range() {
    let stat = Statistic::BoundedRange {
        current: 15,
        lower_bound: 0,
        upper_bound: 50,
    };
    assert_eq!(stat.as_range_current(), Some(15));
    assert_eq!(stat.as_bounded(), Some((15, 50)));
}

#[test]
fn test_plain_range_has_no_bounds() {
    let stat = Statistic::Range {
        current: 3,
        low_water_mark: 0,
        high_water_mark: 7,
    };
    assert_eq!(stat.as_range_current(), Some(3));
    assert_eq!(stat.as_bounded(), None);
}

#[test]
fn test_time_mean() {
    let stat = Statistic::Time {
        count: 4,
        total: 10.0,
        min: 1.0,
        max: 4.0,
    };
    assert_eq!(stat.as_time_mean(), Some(2.5));

    let empty = Statistic::Time {
        count: 0,
        total: 0.0,
        min: 0.0,
        max: 0.0,
    };
    assert_eq!(empty.as_time_mean(), Some(0.0));
}

#[test]
fn test_node_builder_and_lookup() {
    let node = StatNode::new("threadPoolModule").with_sub_stat(
        StatNode::new("WebContainer")
            .with_statistic("ActiveCount", Statistic::Count { count: 1 }),
    );

    assert_eq!(node.sub_stats().len(), 1);
    let child = &node.sub_stats()[0];
    assert_eq!(child.name, "WebContainer");
    assert!(child.statistic("ActiveCount").is_some());
    assert!(child.statistic("PoolSize").is_none());
}

#[test]
fn test_statistic_deserialize_tagged() {
    let json = r#"{"type": "bounded_range", "current": 5, "upper_bound": 20}"#;
    let stat: Statistic = serde_json::from_str(json).unwrap();
    assert_eq!(stat.as_bounded(), Some((5, 20)));
}

#[test]
fn test_node_deserialize_defaults() {
    let json = r#"{"name": "jvmRuntimeModule"}"#;
    let node: StatNode = serde_json::from_str(json).unwrap();
    assert_eq!(node.name, "jvmRuntimeModule");
    assert!(node.statistics.is_empty());
    assert!(node.sub_stats.is_empty());
}
