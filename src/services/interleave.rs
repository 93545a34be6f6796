//! 队列前缀交错服务 - 业务能力层
//!
//! 只负责"打散相邻同前缀学号"能力，不关心场次和考场

use std::collections::HashMap;

use rand::seq::SliceRandom;
use regex::Regex;

use crate::error::AppResult;

/// 队列前缀交错服务
///
/// 职责：
/// - 从学号中提取前缀（学号里所有字母字符按原顺序拼接，
///   如 "21CS045" → "CS"）作为院系/班级的代理
/// - 按前缀分桶后轮转交错，使相邻座位尽量来自不同前缀
/// - 不出现 Room / Examinee
/// - 不关心分配顺序之外的任何语义
pub struct CohortInterleaver;

impl CohortInterleaver {
    /// 创建新的交错服务
    pub fn new() -> Self {
        Self
    }

    /// 将学号列表按前缀交错重排
    ///
    /// # 参数
    /// - `rolls`: 场次内已整体打散的学号列表
    ///
    /// # 返回
    /// 返回交错后的学号序列，长度与输入相同
    ///
    /// 桶顺序取首次出现顺序；每个桶内部再独立打散一次，
    /// 然后按桶顺序轮转，每轮从每个非空桶的末尾弹出一个
    pub fn interleave(&self, rolls: &[String]) -> AppResult<Vec<String>> {
        let alpha = Regex::new(r"\p{Alphabetic}+")?;

        let mut bucket_order: Vec<String> = Vec::new();
        let mut buckets: HashMap<String, Vec<String>> = HashMap::new();

        for roll in rolls {
            let prefix = cohort_prefix(&alpha, roll);
            let bucket = buckets.entry(prefix.clone()).or_insert_with(|| {
                bucket_order.push(prefix);
                Vec::new()
            });
            bucket.push(roll.clone());
        }

        let mut rng = rand::rng();
        for bucket in buckets.values_mut() {
            bucket.shuffle(&mut rng);
        }

        // 轮转交错：每轮按桶顺序从末尾各取一个，直到所有桶清空
        let mut separated = Vec::with_capacity(rolls.len());
        loop {
            let mut popped = false;
            for prefix in &bucket_order {
                if let Some(roll) = buckets.get_mut(prefix).and_then(Vec::pop) {
                    separated.push(roll);
                    popped = true;
                }
            }
            if !popped {
                break;
            }
        }

        Ok(separated)
    }
}

impl Default for CohortInterleaver {
    fn default() -> Self {
        Self::new()
    }
}

/// 提取学号中的前缀：所有字母字符按原顺序拼接
fn cohort_prefix(alpha: &Regex, roll_no: &str) -> String {
    alpha.find_iter(roll_no).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_of(roll: &str) -> String {
        let alpha = Regex::new(r"\p{Alphabetic}+").unwrap();
        cohort_prefix(&alpha, roll)
    }

    #[test]
    fn test_cohort_prefix_extraction() {
        assert_eq!(prefix_of("21CS045"), "CS");
        assert_eq!(prefix_of("EC1234"), "EC");
        assert_eq!(prefix_of("ME20A7"), "MEA");
        assert_eq!(prefix_of("123456"), "");
    }

    #[test]
    fn test_interleave_keeps_all_rolls() {
        let rolls: Vec<String> = ["CS1", "CS2", "CS3", "EC1", "EC2"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let interleaver = CohortInterleaver::new();
        let separated = interleaver.interleave(&rolls).unwrap();

        assert_eq!(separated.len(), rolls.len(), "交错不应增删学号");
        let mut sorted = separated.clone();
        sorted.sort();
        let mut expected = rolls.clone();
        expected.sort();
        assert_eq!(sorted, expected, "交错应是输入的一个排列");
    }

    #[test]
    fn test_interleave_round_robin_structure() {
        // CS 桶 3 个、EC 桶 2 个：前两轮每轮各出一个 CS 和一个 EC，
        // 最后剩下的必然是 CS
        let rolls: Vec<String> = ["CS1", "CS2", "CS3", "EC1", "EC2"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let interleaver = CohortInterleaver::new();
        let separated = interleaver.interleave(&rolls).unwrap();

        for cycle in 0..2 {
            let window = &separated[cycle * 2..cycle * 2 + 2];
            let cs = window.iter().filter(|r| r.starts_with("CS")).count();
            let ec = window.iter().filter(|r| r.starts_with("EC")).count();
            assert_eq!((cs, ec), (1, 1), "每轮应各弹出一个 CS 和一个 EC");
        }
        assert!(separated[4].starts_with("CS"), "最后剩余的应是 CS");
    }

    #[test]
    fn test_interleave_single_bucket() {
        let rolls: Vec<String> = ["CS1", "CS2", "CS3"].iter().map(|s| s.to_string()).collect();

        let interleaver = CohortInterleaver::new();
        let separated = interleaver.interleave(&rolls).unwrap();

        assert_eq!(separated.len(), 3, "单桶也应输出全部学号");
    }
}
