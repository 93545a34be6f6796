use std::collections::{HashMap, HashSet};

use exam_seat_allocation::error::{AllocationError, AppError};
use exam_seat_allocation::{AllocationFlow, Config, Examinee, Room};

/// 构造考生记录
fn examinee(roll: &str, date: &str, session: &str) -> Examinee {
    Examinee {
        roll_no: roll.to_string(),
        student_name: format!("考生{}", roll),
        department: "计算机".to_string(),
        subject: "数学".to_string(),
        exam_date: date.to_string(),
        exam_session: session.to_string(),
    }
}

fn room(no: &str, capacity: u32) -> Room {
    Room {
        room_no: no.to_string(),
        capacity,
    }
}

fn flow() -> AllocationFlow {
    AllocationFlow::new(&Config::default())
}

#[test]
fn test_no_double_booking_within_group() {
    let roster: Vec<Examinee> = (0..10)
        .map(|i| examinee(&format!("CS{}", i), "2026-06-01", "上午"))
        .collect();
    let rooms = vec![room("R1", 4), room("R2", 4), room("R3", 4)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let mut seen = HashSet::new();
    for r in run.records() {
        let key = (
            r.exam_date.clone(),
            r.exam_session.clone(),
            r.room_no.clone(),
            r.seat_no,
        );
        assert!(seen.insert(key), "场次内同一座位不应被分配两次");
    }
}

#[test]
fn test_no_duplicate_student() {
    let roster: Vec<Examinee> = (0..8)
        .map(|i| examinee(&format!("EC{}", i), "2026-06-01", "下午"))
        .collect();
    let rooms = vec![room("R1", 10)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let mut seen = HashSet::new();
    for r in run.records() {
        assert!(seen.insert(r.roll_no.clone()), "每个学号最多出现一次");
    }
    assert_eq!(run.len(), 8, "所有考生都应获得座位");
}

#[test]
fn test_capacity_respected() {
    let roster: Vec<Examinee> = (0..9)
        .map(|i| examinee(&format!("ME{}", i), "2026-06-01", "上午"))
        .collect();
    let rooms = vec![room("R1", 3), room("R2", 5), room("R3", 4)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let mut per_room: HashMap<String, usize> = HashMap::new();
    for r in run.records() {
        *per_room.entry(r.room_no.clone()).or_default() += 1;
    }
    assert!(per_room.get("R1").copied().unwrap_or(0) <= 3, "R1 不应超员");
    assert!(per_room.get("R2").copied().unwrap_or(0) <= 5, "R2 不应超员");
    assert!(per_room.get("R3").copied().unwrap_or(0) <= 4, "R3 不应超员");
}

#[test]
fn test_seat_numbering_contiguous_from_one() {
    let roster: Vec<Examinee> = (0..7)
        .map(|i| examinee(&format!("CS{}", i), "2026-06-01", "上午"))
        .collect();
    let rooms = vec![room("R1", 4), room("R2", 4)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let mut per_room: HashMap<String, Vec<u32>> = HashMap::new();
    for r in run.records() {
        per_room.entry(r.room_no.clone()).or_default().push(r.seat_no);
    }
    for (room_no, mut seats) in per_room {
        seats.sort_unstable();
        let expected: Vec<u32> = (1..=seats.len() as u32).collect();
        assert_eq!(seats, expected, "考场 {} 的座位号应从 1 连续编号", room_no);
    }
}

#[test]
fn test_rooms_filled_in_first_appearance_order() {
    let roster: Vec<Examinee> = (0..3)
        .map(|i| examinee(&format!("CS{}", i), "2026-06-01", "上午"))
        .collect();
    // R2 在表中先出现，应先被填满
    let rooms = vec![room("R2", 2), room("R1", 2)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    assert_eq!(run.records()[0].room_no, "R2", "先出现的考场应先被填充");
    assert_eq!(run.records()[1].room_no, "R2");
    assert_eq!(run.records()[2].room_no, "R1", "前一个考场满后才进入下一个");
}

#[test]
fn test_overflow_students_omitted() {
    // 2 个容量为 1 的考场、3 名考生：恰好 2 条分配，1 人落空
    let roster = vec![
        examinee("CS1", "2026-06-01", "上午"),
        examinee("CS2", "2026-06-01", "上午"),
        examinee("EC1", "2026-06-01", "上午"),
    ];
    let rooms = vec![room("R1", 1), room("R2", 1)];

    let run = flow().run(&roster, &rooms).expect("容量溢出不应是错误");

    assert_eq!(run.len(), 2, "应恰好产生 2 条座位分配");
}

#[test]
fn test_room_walk_resets_per_group() {
    // 两个场次共用考场：每个场次的遍历都从 R1 的 1 号座位重新开始
    let mut roster = Vec::new();
    for i in 0..3 {
        roster.push(examinee(&format!("CS{}", i), "2026-06-01", "上午"));
    }
    for i in 0..2 {
        roster.push(examinee(&format!("EC{}", i), "2026-06-02", "上午"));
    }
    let rooms = vec![room("R1", 5), room("R2", 5)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let first_group: Vec<_> = run
        .records()
        .iter()
        .filter(|r| r.exam_date == "2026-06-01")
        .collect();
    let second_group: Vec<_> = run
        .records()
        .iter()
        .filter(|r| r.exam_date == "2026-06-02")
        .collect();

    assert_eq!(first_group.len(), 3);
    assert_eq!(second_group.len(), 2);

    for group in [&first_group, &second_group] {
        assert_eq!(group[0].room_no, "R1", "每个场次都应从第一个考场开始");
        assert_eq!(group[0].seat_no, 1, "每个场次都应从 1 号座位开始");
    }

    // 场次内座位不重复；跨场次允许复用同一 (考场, 座位)
    let reused = second_group
        .iter()
        .any(|r| first_group.iter().any(|f| f.room_no == r.room_no && f.seat_no == r.seat_no));
    assert!(reused, "不同场次应复用相同的考场座位");
}

#[test]
fn test_groups_processed_in_key_order() {
    // 花名册乱序给出，结果应按 (日期, 时段) 的自然顺序分块
    let roster = vec![
        examinee("CS1", "2026-06-02", "上午"),
        examinee("CS2", "2026-06-01", "下午"),
        examinee("CS3", "2026-06-01", "上午"),
    ];
    let rooms = vec![room("R1", 10)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let keys: Vec<(String, String)> = run
        .records()
        .iter()
        .map(|r| (r.exam_date.clone(), r.exam_session.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "场次应按键的自然顺序依次输出");
}

#[test]
fn test_empty_roster_is_error() {
    let rooms = vec![room("R1", 10)];

    let result = flow().run(&[], &rooms);

    assert!(
        matches!(
            result,
            Err(AppError::Allocation(AllocationError::EmptyResult))
        ),
        "空花名册应返回 EmptyResult 错误"
    );
}

#[test]
fn test_no_rooms_is_error() {
    let roster = vec![examinee("CS1", "2026-06-01", "上午")];

    let result = flow().run(&roster, &[]);

    assert!(
        matches!(
            result,
            Err(AppError::Allocation(AllocationError::EmptyResult))
        ),
        "没有考场应返回 EmptyResult 错误"
    );
}

#[test]
fn test_zero_total_capacity_is_error() {
    let roster = vec![examinee("CS1", "2026-06-01", "上午")];
    let rooms = vec![room("R1", 0), room("R2", 0)];

    let result = flow().run(&roster, &rooms);

    assert!(
        matches!(
            result,
            Err(AppError::Allocation(AllocationError::EmptyResult))
        ),
        "总容量为零应返回 EmptyResult 错误"
    );
}

#[test]
fn test_duplicate_room_rows_use_first_capacity() {
    // 考场列表带重复编号时按首次出现去重
    let roster: Vec<Examinee> = (0..3)
        .map(|i| examinee(&format!("CS{}", i), "2026-06-01", "上午"))
        .collect();
    let rooms = vec![room("R1", 2), room("R1", 9), room("R2", 2)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let in_r1 = run.records().iter().filter(|r| r.room_no == "R1").count();
    assert_eq!(in_r1, 2, "重复考场行应按首次出现的容量处理");
}

#[test]
fn test_run_meta_taken_from_first_row() {
    let roster = vec![examinee("CS1", "2026-06-01", "上午")];
    let rooms = vec![room("R1", 1)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    let meta = run.meta().expect("非空结果应有元信息");
    assert_eq!(meta.exam_date, "2026-06-01");
    assert_eq!(meta.exam_session, "上午");
}

#[test]
fn test_find_examinee_by_roll_no() {
    let roster = vec![
        examinee("CS1", "2026-06-01", "上午"),
        examinee("EC1", "2026-06-01", "上午"),
    ];
    let rooms = vec![room("R1", 5)];

    let run = flow().run(&roster, &rooms).expect("排座应该成功");

    assert!(run.find_examinee("CS1").is_some(), "应能按学号找到考生");
    assert!(run.find_examinee(" CS1 ").is_some(), "学号查询应容忍首尾空白");
    assert!(run.find_examinee("XX9").is_none(), "未知学号应返回 None");
}
