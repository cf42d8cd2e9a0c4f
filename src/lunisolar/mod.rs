//! East-Asian lunisolar calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序以預製的壓縮曆表推算公曆 1583 至 2100 年間的夏曆日期。數據見 [`data`]，
//! 解壓見 [`codec`]，解壓後所建三表見 [`tables`]。

use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::date::Date;
use crate::error::Error;

pub mod codec;
pub mod data;
pub mod fmt;
pub mod numeral;
pub mod tables;

use fmt::{NamedDate, Sino, SinoOptions, YearNamer};
use tables::{ERA_START, LeapTable, MonthLengthTable, NewYearTable};

/// 支持的首個公曆年。
pub const FIRST_YEAR: i32 = 1583;
/// 支持的末個公曆年。
pub const LAST_YEAR: i32 = 2100;

/// 估算月序時所用的除數，大於任何一月的日數，故估值不會超過實際月序。
const MONTH_ESTIMATE: i32 = 32;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式（正體）。
    pub fn name(&self) -> String {
        fmt::month(*self, fmt::Script::Traditional)
    }
}

/// 夏曆日期。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::{Calendar, Month::*};
///
/// let date = Calendar::global().resolve("2023-03-22").unwrap();
///
/// assert_eq!(40, date.cycle_year); // 癸卯
/// assert_eq!(Leap(2), date.month);
/// assert_eq!((40, 2, 1, true), date.num());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TeacDate {
    /// 年的干支序號，`1..=60`，甲子為 1
    pub cycle_year: u32,
    /// 月
    pub month: Month,
    /// 日，`1..=30`
    pub day: u32,
}

impl TeacDate {
    /// 以 `(干支序號, 月序號, 日, 是否閏月)` 形式輸出。
    pub fn num(&self) -> (u32, u32, u32, bool) {
        (self.cycle_year, self.month.num(), self.day, self.month.is_leap())
    }
    /// 是否在閏月。
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
    /// 以漢字輸出年、月、日，見 [`fmt::sino`]。
    pub fn sino(&self, options: &SinoOptions) -> Sino {
        fmt::sino(self, options)
    }
    /// 以給定語言的年名取代干支序號，見 [`fmt::year_in`]。
    pub fn year_in<N: YearNamer + ?Sized>(&self, namer: &N, lang: &str) -> NamedDate {
        fmt::year_in(namer, lang, self)
    }
}

/// 一個夏曆年的各月，自正月至臘月（或閏臘月）。
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 正月初一所在的公元年
    pub year: i32,
    ladder: Vec<u32>,
    months: Vec<Month>,
    leap: Option<u32>,
}

impl LunarYear {
    fn compute(year: i32, lengths: &MonthLengthTable, leaps: &LeapTable) -> Option<Self> {
        let leap = leaps.get(year);
        // 此前所有閏月皆令其後各月在大小月表中的序號順延
        let inserted = match leap {
            Some(l) => l.index,
            None => leaps.preceding_index(year).map_or(0, |i| i + 1),
        };
        let first = usize::try_from(year - ERA_START).ok()? * 12 + inserted;
        let count = if leap.is_some() { 13 } else { 12 };

        let ladder = lengths
            .slice(first, count)?
            .iter()
            .scan(0, |days, &long| {
                *days += 29 + long as u32;
                Some(*days)
            })
            .collect();

        let mut months: Vec<_> = (1..=12).map(Month::Common).collect();
        if let Some(l) = leap {
            let at = (l.month as usize).min(months.len());
            months.insert(at, Month::Leap(l.month));
        }

        Some(Self {
            year,
            ladder,
            months,
            leap: leap.map(|l| l.month),
        })
    }
    /// 各月末距正月初一的累計日數，末項即全年日數。
    ///
    /// # 用例
    ///
    /// ```
    /// use teac::lunisolar::Calendar;
    ///
    /// let year = Calendar::global().year(2023).unwrap();
    /// assert_eq!(13, year.ladder().len());
    /// assert_eq!(&[29, 59, 88], &year.ladder()[..3]);
    /// assert_eq!(384, year.days());
    /// ```
    pub fn ladder(&self) -> &[u32] {
        &self.ladder
    }
    /// 各月月名，閏月緊接同號平月之後。
    pub fn months(&self) -> &[Month] {
        &self.months
    }
    /// 閏月序號，無閏則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        self.leap
    }
    /// 全年日數。
    pub fn days(&self) -> u32 {
        self.ladder.last().copied().unwrap_or(0)
    }
    /// 全年月數。
    pub fn len(&self) -> usize {
        self.ladder.len()
    }
    /// 是否無月份（僅在數據有誤時出現）。
    pub fn is_empty(&self) -> bool {
        self.ladder.is_empty()
    }
}

/// 夏曆推算所需的全部曆表。
///
/// 三表於建立時一次解出，此後唯讀；各年月表則於首次查詢時計算並保存。
#[derive(Debug)]
pub struct Calendar {
    new_years: NewYearTable,
    month_lengths: MonthLengthTable,
    leaps: LeapTable,
    years: Vec<OnceLock<Option<LunarYear>>>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// 解壓內嵌數據並建立曆表。
    pub fn new() -> Self {
        let new_years = NewYearTable::embedded();
        let month_lengths = MonthLengthTable::embedded();
        let leaps = LeapTable::embedded();
        debug!(
            new_years = ?new_years.years(),
            months = month_lengths.len(),
            leap_years = leaps.len(),
            "decoded calendar tables"
        );
        let years = (ERA_START..=LAST_YEAR).map(|_| OnceLock::new()).collect();
        Self {
            new_years,
            month_lengths,
            leaps,
            years,
        }
    }

    /// 取得全程序共用的曆表，首次調用時建立。
    pub fn global() -> &'static Self {
        static CALENDAR: OnceLock<Calendar> = OnceLock::new();
        CALENDAR.get_or_init(Self::new)
    }

    /// 取得正月初一在公元 `year` 年的夏曆年。
    ///
    /// 支持 1582 至 2100 年，其餘返回 `None`。
    pub fn year(&self, year: i32) -> Option<&LunarYear> {
        let slot = self.years.get(usize::try_from(year - ERA_START).ok()?)?;
        slot.get_or_init(|| {
            let computed = LunarYear::compute(year, &self.month_lengths, &self.leaps);
            trace!(year, months = ?computed.as_ref().map(LunarYear::len), "computed month ladder");
            computed
        })
        .as_ref()
    }

    /// 取得公曆 `year` 年內正月初一的日期。
    ///
    /// # 用例
    ///
    /// ```
    /// use teac::lunisolar::Calendar;
    ///
    /// let date = Calendar::global().new_year(2023).unwrap();
    /// assert_eq!("2023-01-22", date.iso_gregorian());
    /// ```
    pub fn new_year(&self, year: i32) -> Option<Date> {
        let day = self.new_years.get(year)?;
        Some(Date::from_gregorian(year, 1, 1)? + (day as i32 - 1))
    }

    /// 閏月表。
    pub fn leaps(&self) -> &LeapTable {
        &self.leaps
    }

    /// 解析 `YYYY-MM-DD` 形式的日期並取得對應夏曆日期，見 [`Calendar::resolve_date`]。
    pub fn resolve(&self, input: &str) -> Result<TeacDate, Error> {
        self.resolve_date(input.parse()?)
    }

    /// 取得給定日期的夏曆日期。
    ///
    /// 若公曆年不在 1583 至 2100 之間則回報 [`Error::OutOfRange`]。
    ///
    /// # 用例
    ///
    /// ```
    /// use teac::Date;
    /// use teac::lunisolar::{Calendar, Month::*};
    ///
    /// let calendar = Calendar::global();
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let teac = calendar.resolve_date(date).unwrap();
    ///
    /// assert_eq!((16, Common(11), 25), (teac.cycle_year, teac.month, teac.day));
    /// ```
    pub fn resolve_date(&self, date: Date) -> Result<TeacDate, Error> {
        let (gregorian_year, _, _) = date.gregorian();
        let out_of_range = || Error::OutOfRange {
            year: gregorian_year,
        };
        if !(FIRST_YEAR..=LAST_YEAR).contains(&gregorian_year) {
            return Err(out_of_range());
        }
        let new_year = self.new_years.get(gregorian_year).ok_or_else(out_of_range)?;

        // 以正月初一為 1 的日序，不足 1 則屬上一夏曆年
        let year_day = date.ordinal() - new_year as i32 + 1;
        let previous = year_day < 1;
        let year = if previous {
            gregorian_year - 1
        } else {
            gregorian_year
        };
        let lunar = self.year(year).ok_or_else(out_of_range)?;
        let kalends = |i: usize| lunar.ladder[i] as i32;
        let len = lunar.len();

        let (month_idx, day) = if previous {
            // 自年末倒數：先試末月，不足則落在倒數第二月
            let last_month = kalends(len - 1) - kalends(len - 2);
            let day = year_day + last_month;
            if day > 0 {
                (len - 1, day)
            } else {
                (len - 2, day + kalends(len - 2) - kalends(len - 3))
            }
        } else {
            let mut idx = (year_day / MONTH_ESTIMATE) as usize;
            if lunar.ladder.get(idx).is_some_and(|&end| year_day > end as i32) {
                idx += 1;
            }
            let day = if idx == 0 {
                year_day
            } else {
                year_day - kalends(idx - 1)
            };
            (idx, day)
        };

        let month = *lunar.months.get(month_idx).ok_or_else(out_of_range)?;
        let teac = TeacDate {
            cycle_year: sexagenary_for_year(year),
            month,
            day: day as u32,
        };
        trace!(%date, ?teac, "resolved date");
        Ok(teac)
    }
}

/// 以全程序共用的曆表轉換 `YYYY-MM-DD` 形式的日期。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::convert;
///
/// assert_eq!((20, 1, 1, false), convert("1583-01-24").unwrap().num());
/// assert!(convert("2101-01-01").is_err());
/// ```
pub fn convert(input: &str) -> Result<TeacDate, Error> {
    Calendar::global().resolve(input)
}

/// 取得正月初一在公元 `year` 年的夏曆年的干支序號。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::sexagenary_for_year;
///
/// assert_eq!(40, sexagenary_for_year(2023)); // 癸卯
/// assert_eq!(1, sexagenary_for_year(1984)); // 甲子
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    match (year - 1563).rem_euclid(60) {
        0 => 60,
        n => n as u32,
    }
}
