//! 由壓縮數據解出的三種曆表：正月初一、大小月、閏月。
//!
//! 三表各自獨立，皆於 [`super::Calendar::new`] 時建立一次，此後唯讀。

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::warn;

use super::{codec, data, numeral};

/// 大小月序列的起點：公元 1582 年首月序號為 0。
pub const ERA_START: i32 = 1582;
/// 正月初一表首年。
pub const FIRST_NEW_YEAR: i32 = 1583;
/// 1583 年正月初一為公曆 1 月 24 日，不由數據推出。
pub const FIRST_NEW_YEAR_DAY: u32 = 24;
/// 閏月表的起算年，首條記錄距此三年或兩年。
pub const LEAP_ANCHOR: i32 = 1580;
/// 大小月基底中「大小」月對的個數。
pub const BASELINE_PAIRS: usize = 2439;

/// 各公曆年內夏曆正月初一的公曆日序（1 月 1 日為 1）。
#[derive(Debug, Clone)]
pub struct NewYearTable {
    days: Vec<u32>,
}

impl NewYearTable {
    /// 從解壓後的符號建表。
    ///
    /// 累計值從 4 起，每個符號按 [`numeral::new_year_delta`] 增減，記為次年的 `累計值 + 20`。
    pub fn decode(symbols: &[char]) -> Self {
        let mut days = Vec::with_capacity(symbols.len() + 1);
        days.push(FIRST_NEW_YEAR_DAY);
        let mut running = 4;
        for &c in symbols {
            let Some(delta) = numeral::new_year_delta(c) else {
                warn!(symbol = %c, "skipping non-numeral symbol in new-year data");
                continue;
            };
            running += delta;
            days.push((running + 20) as u32);
        }
        Self { days }
    }
    /// 以內嵌數據建表。
    pub fn embedded() -> Self {
        Self::decode(&codec::decode(data::NEW_YEARS, data::NEW_YEARS_MAX_KEY))
    }
    /// 取得公曆 `year` 年正月初一的日序，無數據則返回 `None`。
    pub fn get(&self, year: i32) -> Option<u32> {
        let idx = usize::try_from(year - FIRST_NEW_YEAR).ok()?;
        self.days.get(idx).copied()
    }
    /// 表中涵蓋的公曆年份。
    pub fn years(&self) -> RangeInclusive<i32> {
        FIRST_NEW_YEAR..=FIRST_NEW_YEAR + self.days.len() as i32 - 1
    }
}

/// 自 1582 年首月起逐月的大小月標記，`1` 為大月（三十日），`0` 為小月（二十九日）。
#[derive(Debug, Clone)]
pub struct MonthLengthTable {
    long: Vec<u8>,
}

impl MonthLengthTable {
    /// 從解壓後的符號建表。
    ///
    /// 基底為大小相間的 [`BASELINE_PAIRS`] 對月份。每個符號為距上一插入點的間距，
    /// 在累計所得位置上重複其前一月的標記，其後各月順延一位。
    pub fn decode(symbols: &[char]) -> Self {
        let mut baseline = std::iter::repeat_n([1u8, 0], BASELINE_PAIRS).flatten();
        let mut long = Vec::with_capacity(BASELINE_PAIRS * 2 + symbols.len());
        let mut position = 0;
        for &c in symbols {
            let Some(offset) = numeral::insertion_offset(c) else {
                warn!(symbol = %c, "skipping non-numeral symbol in moon-phase data");
                continue;
            };
            position += offset;
            // 插入點之前的月份不再受後續插入影響，可直接定稿
            while long.len() < position {
                match baseline.next() {
                    Some(v) => long.push(v),
                    None => break,
                }
            }
            if let Some(&prev) = long.last() {
                long.push(prev);
            }
        }
        long.extend(baseline);
        Self { long }
    }
    /// 以內嵌數據建表。
    pub fn embedded() -> Self {
        Self::decode(&codec::decode(data::MOON_PHASES, data::MOON_PHASES_MAX_KEY))
    }
    /// 總月數。
    pub fn len(&self) -> usize {
        self.long.len()
    }
    /// 表是否為空。
    pub fn is_empty(&self) -> bool {
        self.long.is_empty()
    }
    /// 取得序號為 `serial` 之月的日數。
    pub fn days(&self, serial: usize) -> Option<u32> {
        self.long.get(serial).map(|&v| 29 + v as u32)
    }
    /// 取得自 `start` 起連續 `count` 個月的大小月標記。
    pub fn slice(&self, start: usize, count: usize) -> Option<&[u8]> {
        self.long.get(start..start.checked_add(count)?)
    }
}

/// 閏年記錄。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LeapYear {
    /// 該條在閏月數據中的序號，亦即此前已有的閏月數
    pub index: usize,
    /// 閏月序號，閏月緊接同號平月之後
    pub month: u32,
}

/// 公曆年 → 閏月。
#[derive(Debug, Clone)]
pub struct LeapTable {
    leaps: BTreeMap<i32, LeapYear>,
}

impl LeapTable {
    /// 從解壓後的符號建表，每個符號見 [`numeral::leap_step`]。
    pub fn decode(symbols: &[char]) -> Self {
        let mut leaps = BTreeMap::new();
        let mut year = LEAP_ANCHOR;
        for (index, &c) in symbols.iter().enumerate() {
            let Some((stride, month)) = numeral::leap_step(c) else {
                warn!(symbol = %c, "skipping non-numeral symbol in leap-month data");
                continue;
            };
            year += stride;
            leaps.insert(year, LeapYear { index, month });
        }
        Self { leaps }
    }
    /// 以內嵌數據建表。
    pub fn embedded() -> Self {
        Self::decode(&codec::decode(data::LEAP_MONTHS, data::LEAP_MONTHS_MAX_KEY))
    }
    /// 取得公曆 `year` 年（所對應夏曆年）的閏月，無閏則返回 `None`。
    pub fn get(&self, year: i32) -> Option<LeapYear> {
        self.leaps.get(&year).copied()
    }
    /// 前三年內最近一個閏年的序號。
    pub fn preceding_index(&self, year: i32) -> Option<usize> {
        (1..=3)
            .filter_map(|back| self.get(year - back))
            .map(|leap| leap.index)
            .max()
    }
    /// 閏年數。
    pub fn len(&self) -> usize {
        self.leaps.len()
    }
    /// 表是否為空。
    pub fn is_empty(&self) -> bool {
        self.leaps.is_empty()
    }
    /// 依年份順序列出全部閏年。
    pub fn iter(&self) -> impl Iterator<Item = (i32, LeapYear)> + '_ {
        self.leaps.iter().map(|(&y, &l)| (y, l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_years() {
        let table = NewYearTable::embedded();
        assert_eq!(1583..=2100, table.years());
        for (std, year) in [(24, 1583), (43, 1584), (31, 1585), (49, 1586), (22, 2023), (41, 2024)] {
            assert_eq!(Some(std), table.get(year), "{year}");
        }
        assert_eq!(None, table.get(1582));
        assert_eq!(None, table.get(2101));
    }

    #[test]
    fn new_years_in_winter() {
        let table = NewYearTable::embedded();
        for year in table.years() {
            let day = table.get(year).unwrap();
            assert!((21..=51).contains(&day), "{year}: {day}");
        }
    }

    #[test]
    fn month_lengths() {
        let table = MonthLengthTable::embedded();
        assert_eq!(6419, table.len());
        let head: String = table.slice(0, 30).unwrap().iter().map(|v| v.to_string()).collect();
        assert_eq!("100100110111010010010111101001", head);
        assert_eq!(Some(30), table.days(0));
        assert_eq!(Some(29), table.days(1));
        assert_eq!(None, table.days(6419));
        assert_eq!(None, table.slice(6410, 12));
    }

    #[test]
    fn insertion_repeats_previous() {
        // baseline 1 0 1 0 ...; inserting at 1 then 3 repeats the preceding marks
        let table = MonthLengthTable::decode(&['1', '2']);
        assert_eq!(Some(&[1, 1, 0, 0, 1, 0][..]), table.slice(0, 6));
        assert_eq!(BASELINE_PAIRS * 2 + 2, table.len());
    }

    #[test]
    fn leaps() {
        let table = LeapTable::embedded();
        assert_eq!(191, table.len());
        let std = [
            (1583, 0, 2),
            (1585, 1, 9),
            (1588, 2, 6),
            (2017, 160, 6),
            (2020, 161, 4),
            (2023, 162, 2),
            (2033, 166, 11),
            (2099, 190, 2),
        ];
        for (year, index, month) in std {
            assert_eq!(Some(LeapYear { index, month }), table.get(year), "{year}");
        }
        assert_eq!(None, table.get(1584));
        assert_eq!(Some(160), table.preceding_index(2018));
        assert_eq!(None, table.preceding_index(1582));
    }

    #[test]
    fn leap_spacing() {
        let years: Vec<_> = LeapTable::embedded().iter().map(|(y, _)| y).collect();
        for pair in years.windows(2) {
            assert!((2..=3).contains(&(pair[1] - pair[0])), "{pair:?}");
        }
    }
}
