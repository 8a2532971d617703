use {
    rstest::rstest,
    vmsim::{
        Access,
        AccessKind::{Load, Store},
        LruPolicy,
        PageNumber,
        ProcessId::{First, Second},
        ReplacementPolicy,
        Report,
    },
};

/// Replays `(kind, page)` accesses of the first process, numbering lines from
/// zero.
fn replay(policy: &mut LruPolicy, accesses: &[(vmsim::AccessKind, PageNumber)]) -> Report {
    let mut report = Report::new(policy.name(), 0, 4);
    for (line, &(kind, page)) in accesses.iter().enumerate() {
        policy
            .simulate(&Access::new(kind, page, First, line), &mut report)
            .unwrap();
        assert!(policy.resident(First) <= policy.capacity(First));
    }
    report
}

#[test]
fn basic_ops() {
    let mut policy = LruPolicy::new([3, 3]);
    assert_eq!(policy.capacity(First), 3);
    assert_eq!(policy.resident(First), 0);

    // Scenario: fill all three frames. Every first reference faults.
    let report = replay(&mut policy, &[(Load, 1), (Load, 2), (Load, 3)]);
    assert_eq!(report.counters(), (3, 3, 0));
    assert_eq!(policy.resident(First), 3);
    assert_eq!(policy.peek_victim(First), Some(1));

    // Scenario: reference 1 again. It should be moved to the end of the queue.
    let mut report = replay(&mut policy, &[(Load, 1)]);
    assert_eq!(report.counters(), (1, 0, 0));
    assert_eq!(policy.peek_victim(First), Some(2));

    // Scenario: bring in 4, evicting the least recently used page 2.
    policy
        .simulate(&Access::new(Load, 4, First, 4), &mut report)
        .unwrap();
    assert_eq!(report.counters(), (2, 1, 0));
    assert!(!policy.is_resident(First, 2));
    assert!(policy.is_resident(First, 1));
    assert!(policy.is_resident(First, 3));
    assert!(policy.is_resident(First, 4));
    assert_eq!(policy.peek_victim(First), Some(3));

    // The other process is untouched.
    assert_eq!(policy.resident(Second), 0);
}

#[test]
fn single_frame_thrashes() {
    let mut policy = LruPolicy::new([1, 1]);
    let report = replay(&mut policy, &[(Load, 1), (Load, 2), (Load, 1), (Load, 2)]);
    assert_eq!(report.counters(), (4, 4, 0));
}

#[test]
fn reference_string() {
    // 7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1 with three frames: 12 faults.
    let pages: [PageNumber; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
    let accesses = pages.map(|page| (Load, page));

    let mut policy = LruPolicy::new([3, 3]);
    let report = replay(&mut policy, &accesses);
    assert_eq!(report.counters(), (20, 12, 0));
}

#[rstest]
// Page stored to, then evicted: one write.
#[case(&[(Store, 1), (Load, 2)], (2, 2, 1))]
// Evicted record is dropped, 1 comes back clean: still one write.
#[case(&[(Store, 1), (Load, 2), (Load, 1), (Load, 2)], (4, 4, 1))]
// Written again after coming back: charged again.
#[case(&[(Store, 1), (Load, 2), (Store, 1), (Load, 2)], (4, 4, 2))]
// Clean pages never cost a write.
#[case(&[(Load, 1), (Load, 2), (Load, 1)], (3, 3, 0))]
fn dirty_eviction(#[case] accesses: &[(vmsim::AccessKind, PageNumber)], #[case] expected: (u64, u64, u64)) {
    let mut policy = LruPolicy::new([1, 1]);
    let report = replay(&mut policy, accesses);
    assert_eq!(report.counters(), expected);
}

#[test]
fn store_hit_marks_dirty() {
    let mut policy = LruPolicy::new([2, 2]);

    // Scenario: load 1, then store to it while resident.
    let report = replay(&mut policy, &[(Load, 1), (Store, 1)]);
    assert_eq!(report.counters(), (2, 1, 0));
    assert!(policy.page_record(First, 1).unwrap().dirty);

    // Scenario: 1 is the least recently used page when 3 comes in.
    let report = replay(&mut policy, &[(Load, 2), (Load, 3)]);
    assert_eq!(report.counters(), (2, 2, 1));
    assert!(policy.page_record(First, 1).is_none());
}

#[test]
fn zero_capacity() {
    let mut policy = LruPolicy::new([0, 2]);
    let report = replay(&mut policy, &[(Store, 1), (Store, 1), (Load, 2), (Store, 1)]);

    // Nothing is ever cached, nothing is ever evicted.
    assert_eq!(report.counters(), (4, 4, 0));
    assert_eq!(policy.resident(First), 0);
    assert_eq!(policy.peek_victim(First), None);
}

#[test]
fn processes_are_independent() {
    let mut policy = LruPolicy::new([1, 1]);
    let mut report = Report::new("LRU", 2, 4);

    // Same page number in both processes: two distinct pages.
    policy
        .simulate(&Access::new(Store, 5, First, 0), &mut report)
        .unwrap();
    policy
        .simulate(&Access::new(Load, 5, Second, 1), &mut report)
        .unwrap();
    assert_eq!(report.counters(), (2, 2, 0));
    assert!(policy.page_record(First, 5).unwrap().dirty);
    assert!(!policy.page_record(Second, 5).unwrap().dirty);

    // Both still resident.
    policy
        .simulate(&Access::new(Load, 5, First, 2), &mut report)
        .unwrap();
    policy
        .simulate(&Access::new(Load, 5, Second, 3), &mut report)
        .unwrap();
    assert_eq!(report.counters(), (4, 2, 0));
}
