//! 格式化日期相關功能
//!
//! 年名經 [`YearNamer`] 取得，可由外部按語言提供；內置的 [`CycleNames`] 涵蓋漢字、韓文、越南文及拼音。

use serde::Deserialize;

use super::{Month, TeacDate};

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const STEMS_KO: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const BRANCHES_KO: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const STEMS_VI: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];
const BRANCHES_VI: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];
const STEMS_PINYIN: [&str; 10] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];
const BRANCHES_PINYIN: [&str; 12] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

/// 干支序號轉為天干、地支的下標。
fn stem_branch(num: u32) -> (usize, usize) {
    let i = (num as i64 - 1).rem_euclid(60) as usize;
    (i % 10, i % 12)
}

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use teac::lunisolar;
///
/// assert_eq!("癸卯", lunisolar::fmt::sexagenary(40));
/// ```
pub fn sexagenary(num: u32) -> String {
    let (s, b) = stem_branch(num);
    STEMS[s].to_owned() + BRANCHES[b]
}

/// 漢字字形。
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// 正體
    #[default]
    Traditional,
    /// 簡體
    Simplified,
}

impl Script {
    /// 閏月前綴。
    pub fn leap_prefix(&self) -> &'static str {
        match self {
            Self::Traditional => "閏",
            Self::Simplified => "闰",
        }
    }
}

/// [`sino`] 的輸出選項，可自宿主程序的 TOML 設定讀入。
///
/// ```
/// use teac::lunisolar::fmt::{Script, SinoOptions};
///
/// let options = SinoOptions::default();
/// assert_eq!(Script::Traditional, options.script);
/// assert!(options.literal);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinoOptions {
    /// 字形
    pub script: Script,
    /// 是否加「年」「月」二字
    pub literal: bool,
}

impl Default for SinoOptions {
    fn default() -> Self {
        Self {
            script: Script::Traditional,
            literal: true,
        }
    }
}

/// 取得月序的漢字，不含「月」字。平月正月稱「正」。
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month_numeral(m: Month, script: Script) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += script.leap_prefix();
    }
    let num = m.num();
    match num {
        1 if !m.is_leap() => rt += "正",
        1..=9 => rt += NUM_CHINESE[num as usize],
        10 => rt += "十",
        11 | 12 => {
            rt += "十";
            rt += NUM_CHINESE[(num % 10) as usize];
        }
        _ => panic!("month {} not in 1..=12", num),
    }
    rt
}

/// 取得月名（含「月」字）。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::{self, Month::*, fmt::Script};
///
/// assert_eq!("正月", lunisolar::fmt::month(Common(1), Script::Traditional));
/// assert_eq!("十一月", lunisolar::fmt::month(Common(11), Script::Traditional));
/// assert_eq!("闰二月", lunisolar::fmt::month(Leap(2), Script::Simplified));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month, script: Script) -> String {
    month_numeral(m, script) + "月"
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use teac::lunisolar;
///
/// assert_eq!("初十", lunisolar::fmt::day(10));
/// assert_eq!("廿五", lunisolar::fmt::day(25));
/// assert_eq!("三十", lunisolar::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 按語言取得年名，可接入外部的本地化服務。
pub trait YearNamer {
    /// 取得干支序號 `cycle_year`（`1..=60`）在語言 `lang`（如 `zh`、`ko-KR`）中的年名。
    fn year_name(&self, lang: &str, cycle_year: u32) -> String;
}

/// 內置年名：`zh`、`ja` 用漢字，`ko` 用韓文，`vi` 用越南文，其餘語言用拼音。
///
/// ```
/// use teac::lunisolar::fmt::{CycleNames, YearNamer};
///
/// assert_eq!("癸卯", CycleNames.year_name("zh-TW", 40));
/// assert_eq!("계묘", CycleNames.year_name("ko", 40));
/// assert_eq!("Quý Mão", CycleNames.year_name("vi", 40));
/// assert_eq!("gui-mao", CycleNames.year_name("en", 40));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct CycleNames;

impl YearNamer for CycleNames {
    fn year_name(&self, lang: &str, cycle_year: u32) -> String {
        let (s, b) = stem_branch(cycle_year);
        let primary = lang.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "zh" | "ja" => sexagenary(cycle_year),
            "ko" => STEMS_KO[s].to_owned() + BRANCHES_KO[b],
            "vi" => format!("{} {}", STEMS_VI[s], BRANCHES_VI[b]),
            _ => format!("{}-{}", STEMS_PINYIN[s], BRANCHES_PINYIN[b]),
        }
    }
}

/// 以年名取代干支序號的夏曆日期。
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct NamedDate {
    pub year: String,
    pub month: u32,
    pub day: u32,
    pub leap: bool,
}

/// 以 `namer` 取得 `date` 所在年在語言 `lang` 中的年名，月日仍為數字。
pub fn year_in<N: YearNamer + ?Sized>(namer: &N, lang: &str, date: &TeacDate) -> NamedDate {
    NamedDate {
        year: namer.year_name(lang, date.cycle_year),
        month: date.month.num(),
        day: date.day,
        leap: date.month.is_leap(),
    }
}

/// 漢字形式的年、月、日。
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Sino {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// 以漢字輸出夏曆日期，例如「癸卯年」「閏二月」「初一」。
///
/// # 用例
///
/// ```
/// use teac::lunisolar::{convert, fmt::{self, Script, SinoOptions}};
///
/// let date = convert("2023-03-22").unwrap();
/// let sino = fmt::sino(&date, &SinoOptions::default());
/// assert_eq!(("癸卯年", "閏二月", "初一"), (&*sino.year, &*sino.month, &*sino.day));
///
/// let options = SinoOptions { script: Script::Simplified, literal: false };
/// let sino = fmt::sino(&date, &options);
/// assert_eq!(("癸卯", "闰二"), (&*sino.year, &*sino.month));
/// ```
pub fn sino(date: &TeacDate, options: &SinoOptions) -> Sino {
    let mut year = sexagenary(date.cycle_year);
    let mut month = month_numeral(date.month, options.script);
    if options.literal {
        year += "年";
        month += "月";
    }
    Sino {
        year,
        month,
        day: day(date.day),
    }
}
